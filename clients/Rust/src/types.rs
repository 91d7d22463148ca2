use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Symbol the service treats as cash
pub const CASH: &str = "CASH";

/// Optional overrides for the model's scalar parameters.
///
/// Unset fields take the service defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Lower bound on non-cash post-trade weight (default -1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_weight: Option<f64>,
    /// Upper bound on non-cash post-trade weight (default 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
    /// Lower bound on post-trade cash weight (default 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_cash_balance: Option<f64>,
    /// Upper bound on the sum of absolute non-cash weights (default 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_leverage: Option<f64>,
    /// Upper bound on any single non-cash trade (default 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_trade_size: Option<f64>,
    /// Multiplier on the transaction cost penalty (default 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_aversion: Option<f64>,
    /// Cost per unit of traded weight (default 0.001)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_cost: Option<f64>,
}

/// Request to the `/run` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRequest {
    /// Weight per asset at the first time-point, including cash
    pub initial_weights: IndexMap<String, f64>,
    /// Return per non-cash asset, keyed by period label `"1"..="T"`
    pub estimated_returns: IndexMap<String, IndexMap<String, f64>>,
    #[serde(default)]
    pub parameters: Parameters,
}

/// Per-asset values keyed by stringified time-point or period
pub type AssetTable = IndexMap<String, IndexMap<String, Option<f64>>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOutput {
    /// `weights[asset][time_point]`, time-points `1..=T+1`
    pub weights: AssetTable,
    /// `trades[asset][period]`, periods `1..=T`
    pub trades: AssetTable,
}

/// Response from the `/run` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub output: ModelOutput,
    /// `0` when solved to optimality, `1` otherwise
    pub status: u8,
}

impl ModelResponse {
    /// Whether the values can be used for trading decisions
    pub fn is_optimal(&self) -> bool {
        self.status == 0
    }

    pub fn weight(&self, asset: &str, time_point: usize) -> Option<f64> {
        lookup(&self.output.weights, asset, time_point)
    }

    pub fn trade(&self, asset: &str, period: usize) -> Option<f64> {
        lookup(&self.output.trades, asset, period)
    }
}

fn lookup(table: &AssetTable, asset: &str, key: usize) -> Option<f64> {
    table
        .get(asset)
        .and_then(|row| row.get(key.to_string().as_str()))
        .copied()
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserializes_nulls() {
        let response: ModelResponse = serde_json::from_str(
            r#"{
                "output": {
                    "weights": {"CASH": {"1": 1.0, "2": null}},
                    "trades": {"CASH": {"1": null}}
                },
                "status": 1
            }"#,
        )
        .unwrap();

        assert!(!response.is_optimal());
        assert_eq!(response.weight("CASH", 1), Some(1.0));
        assert_eq!(response.weight("CASH", 2), None);
        assert_eq!(response.trade("CASH", 1), None);
        assert_eq!(response.trade("AAPL", 1), None);
    }

    #[test]
    fn test_parameters_skip_unset_fields() {
        let parameters = Parameters {
            max_weight: Some(0.5),
            ..Default::default()
        };
        let json = serde_json::to_value(&parameters).unwrap();
        assert_eq!(json, serde_json::json!({"max_weight": 0.5}));
    }

    #[test]
    fn test_request_without_parameters_deserializes_to_defaults() {
        let request: ModelRequest = serde_json::from_str(
            r#"{
                "initial_weights": {"CASH": 1.0, "AAPL": 0.0},
                "estimated_returns": {"AAPL": {"1": 0.05}}
            }"#,
        )
        .unwrap();

        assert_eq!(request.parameters, Parameters::default());
        assert_eq!(request.initial_weights.len(), 2);
    }
}
