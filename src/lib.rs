//! Multi-period portfolio rebalancing as a linear program.
//!
//! A request of per-asset return estimates, initial weights and trading
//! limits is normalised, built into an LP, solved with HiGHS and read back as
//! per-asset weights and trades:
//!
//! ```no_run
//! use mpo_api::domain::pipeline::run_model;
//! use mpo_api::domain::solver::SolverConfig;
//! use mpo_api::domain::solvers::HighsSolver;
//! use mpo_api::models::ModelRequest;
//!
//! let request: ModelRequest = serde_json::from_str(r#"{
//!     "initial_weights": {"CASH": 1.0, "AAPL": 0.0},
//!     "estimated_returns": {"AAPL": {"1": 0.05, "2": 0.01}}
//! }"#).unwrap();
//!
//! let solver = HighsSolver::new(SolverConfig::default());
//! let response = run_model(&request, &solver).unwrap();
//! println!("{}", serde_json::to_string_pretty(&response).unwrap());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
