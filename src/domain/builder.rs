//! Construction of the multi-period rebalancing LP.
//!
//! The formulation follows Boyd et al., "Multi-period trading via convex
//! optimization" (2017), restricted to a linear objective: expected return of
//! the post-trade portfolio less a transaction cost penalty.
//!
//! Absolute values are linearised with a pair of non-negative variables
//! `p >= x`, `n >= -x` standing in for `|x|` as `p + n`. This is exact for the
//! trade cost, which is minimised, and for the leverage and trade size limits,
//! which only bound `p + n` from above.

use crate::domain::index::{Family, VariableIndex};
use crate::domain::model::{
    Constraint, LinearExpr, LinearProgram, Objective, Relation, Sense,
};
use crate::domain::normalize::CanonicalData;

/// Build the complete LP for one optimisation run
pub fn construct_model(data: &CanonicalData) -> LinearProgram {
    let mut builder = ModelBuilder::new(data);

    builder.transition();
    builder.self_financing();
    builder.terminal_weight();
    builder.min_weight();
    builder.max_weight();
    builder.min_cash_balance();
    builder.long_only();
    builder.max_leverage();
    builder.max_trade_size();
    builder.initial_weight();
    builder.abs_trade();
    builder.abs_post_trade_weight();

    builder.finish()
}

struct ModelBuilder<'a> {
    data: &'a CanonicalData,
    index: VariableIndex,
    constraints: Vec<Constraint>,
}

impl<'a> ModelBuilder<'a> {
    fn new(data: &'a CanonicalData) -> Self {
        ModelBuilder {
            data,
            index: VariableIndex::for_data(data),
            constraints: Vec::new(),
        }
    }

    fn push(&mut self, tag: String, lhs: LinearExpr, relation: Relation, rhs: f64) {
        self.constraints.push(Constraint {
            tag,
            lhs,
            relation,
            rhs,
        });
    }

    fn asset(&self, a: usize) -> &'a str {
        &self.data.assets[a]
    }

    fn all_assets(&self) -> std::ops::Range<usize> {
        0..self.data.assets.len()
    }

    /// weight[a,t+1] == weight[a,t] + trade[a,t]
    fn transition(&mut self) {
        for a in self.all_assets() {
            for t in self.data.period_range() {
                let lhs = LinearExpr::new()
                    .term(self.index.weight(a, t + 1), 1.0)
                    .add(self.index.post_trade_weight(a, t).scale(-1.0));
                self.push(format!("transition[{},{}]", self.asset(a), t), lhs, Relation::Eq, 0.0);
            }
        }
    }

    /// Trades in a period net to zero across assets
    fn self_financing(&mut self) {
        for t in self.data.period_range() {
            let lhs = self
                .all_assets()
                .map(|a| (self.index.trade(a, t), 1.0))
                .collect();
            self.push(format!("self_financing[{}]", t), lhs, Relation::Eq, 0.0);
        }
    }

    /// Fully in cash at the final time-point
    fn terminal_weight(&mut self) {
        let last = self.data.time_points();
        for a in self.all_assets() {
            let rhs = if self.data.is_cash(a) { 1.0 } else { 0.0 };
            let lhs = LinearExpr::new().term(self.index.weight(a, last), 1.0);
            self.push(format!("terminal_weight[{}]", self.asset(a)), lhs, Relation::Eq, rhs);
        }
    }

    fn min_weight(&mut self) {
        let data = self.data;
        let bound = data.parameters.min_weight;
        for a in data.non_cash_assets() {
            for t in self.data.period_range() {
                let lhs = self.index.post_trade_weight(a, t);
                self.push(format!("min_weight[{},{}]", self.asset(a), t), lhs, Relation::Ge, bound);
            }
        }
    }

    fn max_weight(&mut self) {
        let data = self.data;
        let bound = data.parameters.max_weight;
        for a in data.non_cash_assets() {
            for t in self.data.period_range() {
                let lhs = self.index.post_trade_weight(a, t);
                self.push(format!("max_weight[{},{}]", self.asset(a), t), lhs, Relation::Le, bound);
            }
        }
    }

    fn min_cash_balance(&mut self) {
        let Some(cash) = self.data.cash_index else {
            return;
        };
        let bound = self.data.parameters.min_cash_balance;
        for t in self.data.period_range() {
            let lhs = self.index.post_trade_weight(cash, t);
            self.push(format!("min_cash_balance[{}]", t), lhs, Relation::Ge, bound);
        }
    }

    /// No shorting, cash included
    fn long_only(&mut self) {
        for a in self.all_assets() {
            for t in self.data.period_range() {
                let lhs = self.index.post_trade_weight(a, t);
                self.push(format!("long_only[{},{}]", self.asset(a), t), lhs, Relation::Ge, 0.0);
            }
        }
    }

    fn max_leverage(&mut self) {
        let bound = self.data.parameters.max_leverage;
        for t in self.data.period_range() {
            let lhs = self
                .data
                .non_cash_assets()
                .fold(LinearExpr::new(), |acc, a| {
                    acc.add(self.index.abs_post_trade_weight(a, t))
                });
            self.push(format!("max_leverage[{}]", t), lhs, Relation::Le, bound);
        }
    }

    fn max_trade_size(&mut self) {
        let data = self.data;
        let bound = data.parameters.max_trade_size;
        for a in data.non_cash_assets() {
            for t in self.data.period_range() {
                let lhs = self.index.abs_trade(a, t);
                self.push(format!("max_trade_size[{},{}]", self.asset(a), t), lhs, Relation::Le, bound);
            }
        }
    }

    fn initial_weight(&mut self) {
        for a in self.all_assets() {
            let lhs = LinearExpr::new().term(self.index.weight(a, 1), 1.0);
            let rhs = self.data.initial_weights[a];
            self.push(format!("initial_weight[{}]", self.asset(a)), lhs, Relation::Eq, rhs);
        }
    }

    /// trade_pos >= trade, trade_neg >= -trade
    fn abs_trade(&mut self) {
        for a in self.all_assets() {
            for t in self.data.period_range() {
                let trade = LinearExpr::new().term(self.index.trade(a, t), 1.0);
                let positive = self.index.column(Family::TradePositive, a, t);
                let negative = self.index.column(Family::TradeNegative, a, t);

                let lhs = LinearExpr::new().term(positive, 1.0).add(trade.clone().scale(-1.0));
                self.push(format!("abs_trade_1[{},{}]", self.asset(a), t), lhs, Relation::Ge, 0.0);

                let lhs = LinearExpr::new().term(negative, 1.0).add(trade);
                self.push(format!("abs_trade_2[{},{}]", self.asset(a), t), lhs, Relation::Ge, 0.0);
            }
        }
    }

    /// post_trade_weight_pos >= weight + trade, post_trade_weight_neg >= -(weight + trade)
    fn abs_post_trade_weight(&mut self) {
        for a in self.all_assets() {
            for t in self.data.period_range() {
                let post_trade = self.index.post_trade_weight(a, t);
                let positive = self.index.column(Family::PostTradeWeightPositive, a, t);
                let negative = self.index.column(Family::PostTradeWeightNegative, a, t);

                let lhs = LinearExpr::new()
                    .term(positive, 1.0)
                    .add(post_trade.clone().scale(-1.0));
                self.push(
                    format!("abs_post_trade_weight_1[{},{}]", self.asset(a), t),
                    lhs,
                    Relation::Ge,
                    0.0,
                );

                let lhs = LinearExpr::new().term(negative, 1.0).add(post_trade);
                self.push(
                    format!("abs_post_trade_weight_2[{},{}]", self.asset(a), t),
                    lhs,
                    Relation::Ge,
                    0.0,
                );
            }
        }
    }

    /// Estimated return of post-trade weights less the trade cost penalty
    fn objective(&self) -> Objective {
        let params = &self.data.parameters;
        let cost = params.trade_aversion * params.transaction_cost;

        let mut expr = LinearExpr::new();
        for a in self.data.non_cash_assets() {
            for t in self.data.period_range() {
                let estimated_return = self.data.return_for(a, t);
                expr = expr.add(self.index.post_trade_weight(a, t).scale(estimated_return));
            }
        }
        for a in self.all_assets() {
            for t in self.data.period_range() {
                expr = expr.add(self.index.abs_trade(a, t).scale(-cost));
            }
        }

        Objective {
            sense: Sense::Maximize,
            expr,
        }
    }

    fn finish(self) -> LinearProgram {
        let objective = self.objective();
        LinearProgram {
            variables: self.index.variables(&self.data.assets),
            constraints: self.constraints,
            objective,
        }
    }
}
