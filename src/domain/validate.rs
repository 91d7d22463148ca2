use crate::error::InputError;
use crate::models::{ModelRequest, ParameterOverrides, CASH};

/// Reject requests the model cannot be built from.
///
/// Beyond shape checks this enforces that every non-cash asset has a return
/// series, that all series cover the same horizon, and that period labels
/// are exactly `1..=T`.
pub fn validate_model_request(request: &ModelRequest) -> Result<(), InputError> {
    if request.initial_weights.is_empty() {
        return Err(InputError::EmptyInitialWeights);
    }
    if request.estimated_returns.is_empty() {
        return Err(InputError::EmptyEstimatedReturns);
    }
    if !request.initial_weights.contains_key(CASH) {
        return Err(InputError::MissingCashAsset(CASH.to_string()));
    }
    if request.estimated_returns.contains_key(CASH) {
        return Err(InputError::CashHasReturns(CASH.to_string()));
    }

    for (asset, weight) in &request.initial_weights {
        ensure_finite(*weight, || format!("initial_weights.{}", asset))?;
        if asset != CASH && !request.estimated_returns.contains_key(asset) {
            return Err(InputError::MissingReturns(asset.clone()));
        }
    }

    let mut horizon: Option<usize> = None;
    for (asset, series) in &request.estimated_returns {
        if !request.initial_weights.contains_key(asset) {
            return Err(InputError::UnknownAsset(asset.clone()));
        }
        if series.is_empty() {
            return Err(InputError::EmptyReturnSeries(asset.clone()));
        }

        let expected = *horizon.get_or_insert(series.len());
        if series.len() != expected {
            return Err(InputError::InconsistentHorizon {
                asset: asset.clone(),
                expected,
                found: series.len(),
            });
        }

        let mut seen = vec![false; expected];
        for (label, value) in series {
            let period = parse_period_label(asset, label)?;
            if period < 1 || period > expected as i64 {
                return Err(InputError::PeriodOutOfRange {
                    asset: asset.clone(),
                    period,
                    horizon: expected,
                });
            }
            if std::mem::replace(&mut seen[period as usize - 1], true) {
                return Err(InputError::DuplicatePeriod {
                    asset: asset.clone(),
                    period,
                });
            }
            ensure_finite(*value, || format!("estimated_returns.{}.{}", asset, label))?;
        }
    }

    validate_parameters(&request.parameters)
}

/// Parse a period label such as `"3"` into its integer index
pub fn parse_period_label(asset: &str, label: &str) -> Result<i64, InputError> {
    label
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidPeriodLabel {
            asset: asset.to_string(),
            label: label.to_string(),
        })
}

fn validate_parameters(parameters: &ParameterOverrides) -> Result<(), InputError> {
    let supplied = [
        ("min_weight", parameters.min_weight),
        ("max_weight", parameters.max_weight),
        ("min_cash_balance", parameters.min_cash_balance),
        ("max_leverage", parameters.max_leverage),
        ("max_trade_size", parameters.max_trade_size),
        ("trade_aversion", parameters.trade_aversion),
        ("transaction_cost", parameters.transaction_cost),
    ];

    for (name, value) in supplied {
        if let Some(value) = value {
            ensure_finite(value, || format!("parameters.{}", name))?;
        }
    }

    Ok(())
}

fn ensure_finite(value: f64, field: impl FnOnce() -> String) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NonFiniteValue { field: field() })
    }
}
