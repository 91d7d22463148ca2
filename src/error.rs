use thiserror::Error;

/// Reasons a model request is rejected before any LP work begins
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("initial_weights must contain at least one asset")]
    EmptyInitialWeights,

    #[error("estimated_returns must contain at least one asset")]
    EmptyEstimatedReturns,

    #[error("initial_weights must include the cash asset \"{0}\"")]
    MissingCashAsset(String),

    #[error("estimated_returns must not contain the cash asset \"{0}\"")]
    CashHasReturns(String),

    #[error("estimated_returns contains asset {0} which is not in initial_weights")]
    UnknownAsset(String),

    #[error("no estimated returns supplied for asset {0}")]
    MissingReturns(String),

    #[error("return series for asset {0} is empty")]
    EmptyReturnSeries(String),

    #[error("return series for asset {asset} has {found} periods, expected {expected}")]
    InconsistentHorizon {
        asset: String,
        expected: usize,
        found: usize,
    },

    #[error("period label {label:?} for asset {asset} is not an integer")]
    InvalidPeriodLabel { asset: String, label: String },

    #[error("period {period} for asset {asset} is outside 1..={horizon}")]
    PeriodOutOfRange {
        asset: String,
        period: i64,
        horizon: usize,
    },

    #[error("period {period} appears more than once for asset {asset}")]
    DuplicatePeriod { asset: String, period: i64 },

    #[error("{field} must be a finite number")]
    NonFiniteValue { field: String },
}
