use std::time::Instant;

use log::{debug, info, warn};

use crate::domain::builder::construct_model;
use crate::domain::extract::get_results;
use crate::domain::normalize::process_inputs;
use crate::domain::solver::Solver;
use crate::error::InputError;
use crate::models::{ModelRequest, ModelResponse, SolveStatus};

/// Normalise inputs, build the LP, solve it and extract results.
///
/// Only input problems are returned as errors. Every solver outcome,
/// including failure to find a solution, produces a response.
pub fn run_model(
    request: &ModelRequest,
    solver: &dyn Solver,
) -> Result<ModelResponse, InputError> {
    let data = process_inputs(request)?;

    let problem = construct_model(&data);
    debug!(
        "Built model for {} assets over {} periods: {} variables, {} constraints",
        data.assets.len(),
        data.periods,
        problem.num_variables(),
        problem.num_constraints()
    );

    let started = Instant::now();
    let outcome = solver.solve(&problem);
    let response = get_results(&data, &outcome);

    match response.status {
        SolveStatus::Optimal => info!(
            "{} solved model optimally in {:?}",
            solver.name(),
            started.elapsed()
        ),
        SolveStatus::NotSolved => warn!(
            "{} did not solve model (solver_ok={}, optimal={}) after {:?}",
            solver.name(),
            outcome.solver_ok,
            outcome.optimal,
            started.elapsed()
        ),
    }

    Ok(response)
}
