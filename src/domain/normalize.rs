use crate::domain::validate::{parse_period_label, validate_model_request};
use crate::error::InputError;
use crate::models::{ModelRequest, ParameterOverrides, CASH};

/// Scalar model parameters with defaults applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub min_weight: f64,
    pub max_weight: f64,
    pub min_cash_balance: f64,
    pub max_leverage: f64,
    pub max_trade_size: f64,
    pub trade_aversion: f64,
    pub transaction_cost: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            min_weight: -1.0,
            max_weight: 1.0,
            min_cash_balance: 0.0,
            max_leverage: 1.0,
            max_trade_size: 1.0,
            trade_aversion: 1.0,
            transaction_cost: 0.001,
        }
    }
}

impl Parameters {
    pub fn with_overrides(overrides: &ParameterOverrides) -> Self {
        let defaults = Parameters::default();
        Parameters {
            min_weight: overrides.min_weight.unwrap_or(defaults.min_weight),
            max_weight: overrides.max_weight.unwrap_or(defaults.max_weight),
            min_cash_balance: overrides
                .min_cash_balance
                .unwrap_or(defaults.min_cash_balance),
            max_leverage: overrides.max_leverage.unwrap_or(defaults.max_leverage),
            max_trade_size: overrides.max_trade_size.unwrap_or(defaults.max_trade_size),
            trade_aversion: overrides.trade_aversion.unwrap_or(defaults.trade_aversion),
            transaction_cost: overrides
                .transaction_cost
                .unwrap_or(defaults.transaction_cost),
        }
    }
}

/// Model data in the canonical index space.
///
/// Assets are addressed by their position in `assets`; periods run `1..=T`
/// and time-points `1..=T+1`. Tables are stored zero-based, so
/// `returns[a][t - 1]` is the return of asset `a` over period `t`.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalData {
    pub assets: Vec<String>,
    pub cash_index: Option<usize>,
    pub periods: usize,
    /// Zero for the cash asset
    pub returns: Vec<Vec<f64>>,
    pub initial_weights: Vec<f64>,
    pub parameters: Parameters,
}

impl CanonicalData {
    pub fn period_range(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.periods
    }

    pub fn time_point_range(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.time_points()
    }

    pub fn time_points(&self) -> usize {
        self.periods + 1
    }

    pub fn is_cash(&self, asset: usize) -> bool {
        self.cash_index == Some(asset)
    }

    pub fn return_for(&self, asset: usize, period: usize) -> f64 {
        self.returns[asset][period - 1]
    }

    /// Positions of every asset other than cash
    pub fn non_cash_assets(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.assets.len()).filter(move |&a| !self.is_cash(a))
    }
}

/// Validate a request and translate it into canonical model data
pub fn process_inputs(request: &ModelRequest) -> Result<CanonicalData, InputError> {
    validate_model_request(request)?;

    let assets: Vec<String> = request.initial_weights.keys().cloned().collect();
    let cash_index = assets.iter().position(|a| a == CASH);

    // All series share one length once validated
    let periods = request
        .estimated_returns
        .values()
        .next()
        .map(|series| series.len())
        .ok_or(InputError::EmptyEstimatedReturns)?;

    let mut returns = vec![vec![0.0; periods]; assets.len()];
    for (a, asset) in assets.iter().enumerate() {
        let Some(series) = request.estimated_returns.get(asset) else {
            continue;
        };
        for (label, value) in series {
            let period = parse_period_label(asset, label)? as usize;
            returns[a][period - 1] = *value;
        }
    }

    let initial_weights = request.initial_weights.values().copied().collect();

    Ok(CanonicalData {
        assets,
        cash_index,
        periods,
        returns,
        initial_weights,
        parameters: Parameters::with_overrides(&request.parameters),
    })
}
