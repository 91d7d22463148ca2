use crate::domain::model::{Domain, LinearExpr, Variable};
use crate::domain::normalize::CanonicalData;

/// Decision variable families of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Weight,
    Trade,
    TradePositive,
    TradeNegative,
    PostTradeWeightPositive,
    PostTradeWeightNegative,
}

impl Family {
    pub const ALL: [Family; 6] = [
        Family::Weight,
        Family::Trade,
        Family::TradePositive,
        Family::TradeNegative,
        Family::PostTradeWeightPositive,
        Family::PostTradeWeightNegative,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Weight => "weight",
            Family::Trade => "trade",
            Family::TradePositive => "trade_pos",
            Family::TradeNegative => "trade_neg",
            Family::PostTradeWeightPositive => "post_trade_weight_pos",
            Family::PostTradeWeightNegative => "post_trade_weight_neg",
        }
    }

    pub fn domain(self) -> Domain {
        match self {
            Family::Weight | Family::Trade => Domain::Free,
            _ => Domain::NonNegative,
        }
    }

    /// Whether the family is indexed by time-point rather than period
    fn per_time_point(self) -> bool {
        matches!(
            self,
            Family::Weight | Family::PostTradeWeightPositive | Family::PostTradeWeightNegative
        )
    }
}

/// Column layout of the model.
///
/// Families are laid out as contiguous blocks in [`Family::ALL`] order; within
/// a block columns run asset-major, then period or time-point. All `t`
/// arguments are one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableIndex {
    assets: usize,
    periods: usize,
}

impl VariableIndex {
    pub fn new(assets: usize, periods: usize) -> Self {
        VariableIndex { assets, periods }
    }

    pub fn for_data(data: &CanonicalData) -> Self {
        Self::new(data.assets.len(), data.periods)
    }

    fn width(&self, family: Family) -> usize {
        if family.per_time_point() {
            self.periods + 1
        } else {
            self.periods
        }
    }

    fn block_len(&self, family: Family) -> usize {
        self.assets * self.width(family)
    }

    fn offset(&self, family: Family) -> usize {
        Family::ALL
            .iter()
            .take_while(|&&f| f != family)
            .map(|&f| self.block_len(f))
            .sum()
    }

    pub fn column(&self, family: Family, asset: usize, t: usize) -> usize {
        debug_assert!(asset < self.assets);
        debug_assert!(t >= 1 && t <= self.width(family));
        self.offset(family) + asset * self.width(family) + (t - 1)
    }

    pub fn len(&self) -> usize {
        Family::ALL.iter().map(|&f| self.block_len(f)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn weight(&self, asset: usize, time_point: usize) -> usize {
        self.column(Family::Weight, asset, time_point)
    }

    pub fn trade(&self, asset: usize, period: usize) -> usize {
        self.column(Family::Trade, asset, period)
    }

    /// `weight[a,t] + trade[a,t]`
    pub fn post_trade_weight(&self, asset: usize, period: usize) -> LinearExpr {
        LinearExpr::new()
            .term(self.weight(asset, period), 1.0)
            .term(self.trade(asset, period), 1.0)
    }

    /// Stand-in for `|trade[a,t]|`
    pub fn abs_trade(&self, asset: usize, period: usize) -> LinearExpr {
        LinearExpr::new()
            .term(self.column(Family::TradePositive, asset, period), 1.0)
            .term(self.column(Family::TradeNegative, asset, period), 1.0)
    }

    /// Stand-in for `|weight[a,t] + trade[a,t]|`
    pub fn abs_post_trade_weight(&self, asset: usize, period: usize) -> LinearExpr {
        LinearExpr::new()
            .term(self.column(Family::PostTradeWeightPositive, asset, period), 1.0)
            .term(self.column(Family::PostTradeWeightNegative, asset, period), 1.0)
    }

    /// Every variable in column order, named `family[asset,t]`
    pub fn variables(&self, asset_names: &[String]) -> Vec<Variable> {
        let mut variables = Vec::with_capacity(self.len());
        for family in Family::ALL {
            for name in asset_names.iter().take(self.assets) {
                for t in 1..=self.width(family) {
                    variables.push(Variable {
                        id: format!("{}[{},{}]", family.name(), name, t),
                        domain: family.domain(),
                    });
                }
            }
        }
        variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["CASH".to_string(), "AAPL".to_string()]
    }

    #[test]
    fn test_len_counts_every_family() {
        // 2 assets, 3 periods: weights 8, trades 6, trade dummies 12, weight dummies 16
        let index = VariableIndex::new(2, 3);
        assert_eq!(index.len(), 8 + 6 + 12 + 16);
        assert_eq!(index.variables(&names()).len(), index.len());
    }

    #[test]
    fn test_columns_are_unique_and_dense() {
        let index = VariableIndex::new(2, 3);
        let mut seen = vec![false; index.len()];
        for family in Family::ALL {
            for asset in 0..2 {
                let width = if family.per_time_point() { 4 } else { 3 };
                for t in 1..=width {
                    let col = index.column(family, asset, t);
                    assert!(!seen[col], "column {} assigned twice", col);
                    seen[col] = true;
                }
            }
        }
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn test_variable_ids_match_columns() {
        let index = VariableIndex::new(2, 3);
        let variables = index.variables(&names());

        assert_eq!(variables[index.weight(1, 4)].id, "weight[AAPL,4]");
        assert_eq!(variables[index.trade(0, 2)].id, "trade[CASH,2]");
        assert_eq!(
            variables[index.column(Family::PostTradeWeightNegative, 1, 1)].id,
            "post_trade_weight_neg[AAPL,1]"
        );
        assert_eq!(variables[index.trade(0, 2)].domain, Domain::Free);
        assert_eq!(
            variables[index.column(Family::TradePositive, 0, 1)].domain,
            Domain::NonNegative
        );
    }

    #[test]
    fn test_post_trade_weight_combines_weight_and_trade() {
        let index = VariableIndex::new(2, 3);
        let expr = index.post_trade_weight(1, 2);
        assert_eq!(
            expr.terms,
            vec![(index.weight(1, 2), 1.0), (index.trade(1, 2), 1.0)]
        );
    }
}
