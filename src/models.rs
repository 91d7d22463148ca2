use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Symbol of the distinguished cash asset
pub const CASH: &str = "CASH";

/// Return series for one asset, keyed by period label ("1", "2", ...)
pub type ReturnSeries = IndexMap<String, f64>;

// ---------- API (wire) types: owned & serde-friendly ----------

/// Optional overrides for the model's scalar parameters.
///
/// Unknown keys are rejected so a misspelt name never falls back to a default.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParameterOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cash_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_leverage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_trade_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_aversion: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_cost: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelRequest {
    pub initial_weights: IndexMap<String, f64>,
    pub estimated_returns: IndexMap<String, ReturnSeries>,
    #[serde(default)]
    pub parameters: ParameterOverrides,
}

// ---------- API response types ----------

/// Coarse solve outcome: `0` when the solver ran cleanly to optimality,
/// `1` for everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Optimal = 0,
    NotSolved = 1,
}

impl SolveStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Serialize for SolveStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for SolveStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(SolveStatus::Optimal),
            1 => Ok(SolveStatus::NotSolved),
            other => Err(serde::de::Error::custom(format!(
                "unknown status code {}",
                other
            ))),
        }
    }
}

/// Per-asset table keyed by stringified time-point or period
pub type AssetTable = IndexMap<String, IndexMap<String, Option<f64>>>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelOutput {
    pub weights: AssetTable,
    pub trades: AssetTable,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModelResponse {
    pub output: ModelOutput,
    pub status: SolveStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_given_unknown_key_should_fail_to_deserialize() {
        let result: Result<ModelRequest, _> = serde_json::from_str(
            r#"{
                "initial_weights": {"CASH": 1.0},
                "estimated_returns": {},
                "parameters": {"max_wieght": 0.5}
            }"#,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("max_wieght"), "unexpected error: {}", err);
    }

    #[test]
    fn test_request_given_no_parameters_should_use_empty_overrides() {
        let request: ModelRequest = serde_json::from_str(
            r#"{"initial_weights": {"CASH": 1.0}, "estimated_returns": {}}"#,
        )
        .unwrap();

        assert_eq!(request.parameters, ParameterOverrides::default());
    }

    #[test]
    fn test_status_given_unknown_code_should_fail_to_deserialize() {
        assert_eq!(serde_json::from_str::<SolveStatus>("0").unwrap(), SolveStatus::Optimal);
        assert!(serde_json::from_str::<SolveStatus>("2").is_err());
    }
}
