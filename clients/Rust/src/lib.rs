//! # MPO API Client
//!
//! A Rust client SDK for the multi-period portfolio optimisation REST API.
//!
//! ## Example
//!
//! ```no_run
//! use mpo_api_sdk::{MpoClient, ModelRequestBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MpoClient::new("http://localhost:9000")?;
//!
//!     let request = ModelRequestBuilder::new()
//!         .initial_weight("CASH", 0.6)
//!         .initial_weight("AAPL", 0.4)
//!         .return_series("AAPL", [0.02, 0.01, -0.01])
//!         .max_weight(0.5)
//!         .build()?;
//!
//!     let response = client.run_model(request).await?;
//!     println!("Weights: {:?}", response.output.weights);
//!     Ok(())
//! }
//! ```

pub mod types;
pub mod client;
pub mod builder;
pub mod error;

pub use client::MpoClient;
pub use types::{AssetTable, ModelOutput, ModelRequest, ModelResponse, Parameters, CASH};
pub use builder::ModelRequestBuilder;
pub use error::{MpoError, Result};
