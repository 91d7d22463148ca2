use indexmap::IndexMap;

use crate::error::{MpoError, Result};
use crate::types::{ModelRequest, Parameters, CASH};

/// Builder for constructing model requests with a fluent API
#[derive(Debug, Default)]
pub struct ModelRequestBuilder {
    initial_weights: IndexMap<String, f64>,
    estimated_returns: IndexMap<String, IndexMap<String, f64>>,
    parameters: Parameters,
}

impl ModelRequestBuilder {
    /// Create a new model request builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of an asset at the first time-point
    ///
    /// # Example
    ///
    /// ```
    /// use mpo_api_sdk::ModelRequestBuilder;
    ///
    /// let builder = ModelRequestBuilder::new()
    ///     .initial_weight("CASH", 0.6)
    ///     .initial_weight("AAPL", 0.4);
    /// ```
    pub fn initial_weight(mut self, asset: impl Into<String>, weight: f64) -> Self {
        self.initial_weights.insert(asset.into(), weight);
        self
    }

    /// Set the estimated return of a non-cash asset for one period (1-based)
    pub fn estimated_return(mut self, asset: impl Into<String>, period: usize, value: f64) -> Self {
        self.estimated_returns
            .entry(asset.into())
            .or_default()
            .insert(period.to_string(), value);
        self
    }

    /// Set a whole return series for a non-cash asset, periods numbered from 1
    ///
    /// # Example
    ///
    /// ```
    /// use mpo_api_sdk::ModelRequestBuilder;
    ///
    /// let builder = ModelRequestBuilder::new()
    ///     .return_series("AAPL", [0.02, 0.01, -0.005]);
    /// ```
    pub fn return_series(
        mut self,
        asset: impl Into<String>,
        returns: impl IntoIterator<Item = f64>,
    ) -> Self {
        let series = returns
            .into_iter()
            .enumerate()
            .map(|(i, value)| ((i + 1).to_string(), value))
            .collect();
        self.estimated_returns.insert(asset.into(), series);
        self
    }

    /// Replace all parameter overrides
    pub fn parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn max_weight(mut self, value: f64) -> Self {
        self.parameters.max_weight = Some(value);
        self
    }

    pub fn max_trade_size(mut self, value: f64) -> Self {
        self.parameters.max_trade_size = Some(value);
        self
    }

    pub fn transaction_cost(mut self, value: f64) -> Self {
        self.parameters.transaction_cost = Some(value);
        self
    }

    /// Build the model request
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No initial weights have been added
    /// - No returns have been added
    /// - The cash asset has no initial weight
    ///
    /// Horizon consistency is checked by the service.
    pub fn build(self) -> Result<ModelRequest> {
        if self.initial_weights.is_empty() {
            return Err(MpoError::InvalidRequest(
                "At least one initial weight is required".to_string(),
            ));
        }

        if self.estimated_returns.is_empty() {
            return Err(MpoError::InvalidRequest(
                "At least one return series is required".to_string(),
            ));
        }

        if !self.initial_weights.contains_key(CASH) {
            return Err(MpoError::InvalidRequest(format!(
                "An initial weight for {} is required",
                CASH
            )));
        }

        Ok(ModelRequest {
            initial_weights: self.initial_weights,
            estimated_returns: self.estimated_returns,
            parameters: self.parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid_request() {
        let request = ModelRequestBuilder::new()
            .initial_weight("CASH", 1.0)
            .initial_weight("AAPL", 0.0)
            .estimated_return("AAPL", 1, 0.05)
            .estimated_return("AAPL", 2, 0.01)
            .max_weight(0.5)
            .build()
            .unwrap();

        assert_eq!(request.estimated_returns["AAPL"]["2"], 0.01);
        assert_eq!(request.parameters.max_weight, Some(0.5));
    }

    #[test]
    fn test_builder_return_series_numbers_periods_from_one() {
        let request = ModelRequestBuilder::new()
            .initial_weight("CASH", 1.0)
            .return_series("MSFT", [0.1, 0.2])
            .build()
            .unwrap();

        let labels: Vec<&String> = request.estimated_returns["MSFT"].keys().collect();
        assert_eq!(labels, vec!["1", "2"]);
    }

    #[test]
    fn test_builder_no_weights() {
        let result = ModelRequestBuilder::new()
            .estimated_return("AAPL", 1, 0.05)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_no_returns() {
        let result = ModelRequestBuilder::new().initial_weight("CASH", 1.0).build();

        assert!(result.is_err());
    }

    #[test]
    fn test_builder_no_cash() {
        let result = ModelRequestBuilder::new()
            .initial_weight("AAPL", 1.0)
            .estimated_return("AAPL", 1, 0.05)
            .build();

        assert!(result.is_err());
    }
}
