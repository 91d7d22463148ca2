use crate::error::{MpoError, Result};
use crate::types::{ModelRequest, ModelResponse};
use reqwest::{Client, StatusCode, Url};

/// HTTP client for interacting with the MPO REST API
#[derive(Debug, Clone)]
pub struct MpoClient {
    client: Client,
    base_url: Url,
}

impl MpoClient {
    /// Create a new MPO API client
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the MPO API (e.g., "http://localhost:9000")
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mpo_api_sdk::MpoClient;
    ///
    /// let client = MpoClient::new("http://localhost:9000").unwrap();
    /// ```
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new MPO API client with custom reqwest client
    ///
    /// This allows you to configure timeouts, proxies, etc. A request timeout
    /// is the way to bound how long a solve may take from the caller's side.
    pub fn with_client(base_url: impl AsRef<str>, client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| MpoError::InvalidUrl(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Check the health of the API server
    pub async fn health_check(&self) -> Result<bool> {
        let url = self.base_url.join("/health")
            .map_err(|e| MpoError::InvalidUrl(e.to_string()))?;

        let response = self.client.get(url).send().await?;
        Ok(response.status().is_success())
    }

    /// Run the rebalancing model
    ///
    /// A response is returned whenever the service accepted the request; check
    /// [`ModelResponse::is_optimal`] before using the weights and trades.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mpo_api_sdk::{MpoClient, ModelRequestBuilder};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MpoClient::new("http://localhost:9000")?;
    ///
    /// let request = ModelRequestBuilder::new()
    ///     .initial_weight("CASH", 1.0)
    ///     .initial_weight("AAPL", 0.0)
    ///     .return_series("AAPL", [0.05, 0.01])
    ///     .build()?;
    ///
    /// let response = client.run_model(request).await?;
    /// if response.is_optimal() {
    ///     println!("AAPL after period 1: {:?}", response.weight("AAPL", 2));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_model(&self, request: ModelRequest) -> Result<ModelResponse> {
        let url = self.base_url.join("/run")
            .map_err(|e| MpoError::InvalidUrl(e.to_string()))?;

        let response = self.client.post(url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status == StatusCode::BAD_REQUEST {
                MpoError::Rejected(error_message(&error_text))
            } else {
                MpoError::ApiError(error_text)
            });
        }

        response
            .json::<ModelResponse>()
            .await
            .map_err(|e| MpoError::ParseError(e.to_string()))
    }
}

/// Pull the `error` field out of a 400 body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = MpoClient::new("http://localhost:9000");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = MpoClient::new("not a valid url");
        assert!(client.is_err());
    }

    #[test]
    fn test_error_message_reads_error_field() {
        assert_eq!(
            error_message(r#"{"error": "initial_weights must include the cash asset"}"#),
            "initial_weights must include the cash asset"
        );
        assert_eq!(error_message("plain text"), "plain text");
    }
}
