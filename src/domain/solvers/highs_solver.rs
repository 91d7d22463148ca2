use std::time::Instant;

use log::{debug, warn};

use crate::domain::model::{Domain, LinearProgram, Relation, Sense};
use crate::domain::solver::{SolveOutcome, Solver, SolverConfig};

use ::highs::{Col, HighsModelStatus, RowProblem, Sense as HighsSense};

/// HiGHS solver implementation
pub struct HighsSolver {
    config: SolverConfig,
}

impl HighsSolver {
    pub fn new(config: SolverConfig) -> Self {
        HighsSolver { config }
    }

    /// Translate the in-memory program into a HiGHS row-wise problem
    fn to_highs_problem(problem: &LinearProgram) -> RowProblem {
        let mut highs_problem = RowProblem::new();

        let columns: Vec<Col> = problem
            .variables
            .iter()
            .zip(problem.objective_coefficients())
            .map(|(var, coefficient)| {
                let lower = match var.domain {
                    Domain::Free => f64::NEG_INFINITY,
                    Domain::NonNegative => 0.0,
                };
                highs_problem.add_column(coefficient, lower..=f64::INFINITY)
            })
            .collect();

        for constraint in &problem.constraints {
            let (lower, upper) = match constraint.relation {
                Relation::Le => (f64::NEG_INFINITY, constraint.rhs),
                Relation::Ge => (constraint.rhs, f64::INFINITY),
                Relation::Eq => (constraint.rhs, constraint.rhs),
            };
            let row_factors: Vec<(Col, f64)> = constraint
                .lhs
                .compact()
                .into_iter()
                .map(|(col, coefficient)| (columns[col], coefficient))
                .collect();
            highs_problem.add_row(lower..=upper, row_factors);
        }

        highs_problem
    }
}

/// Split a HiGHS model status into `(solver_ok, optimal)`.
///
/// Error statuses mean the run itself broke; anything else (time or
/// iteration limits, infeasible, unbounded) is a clean run without an optimum.
fn classify(status: HighsModelStatus) -> (bool, bool) {
    let solver_ok = !matches!(
        status,
        HighsModelStatus::LoadError
            | HighsModelStatus::ModelError
            | HighsModelStatus::PresolveError
            | HighsModelStatus::SolveError
            | HighsModelStatus::PostsolveError
    );
    (solver_ok, status == HighsModelStatus::Optimal)
}

impl Solver for HighsSolver {
    fn solve(&self, problem: &LinearProgram) -> SolveOutcome {
        let started = Instant::now();

        let sense = match problem.objective.sense {
            Sense::Maximize => HighsSense::Maximise,
            Sense::Minimize => HighsSense::Minimise,
        };

        let mut model = Self::to_highs_problem(problem).optimise(sense);
        model.set_option("output_flag", self.config.verbose);
        model.set_option("presolve", if self.config.presolve { "on" } else { "off" });
        if let Some(limit) = self.config.time_limit {
            model.set_option("time_limit", limit);
        }

        let solved = match model.try_solve() {
            Ok(solved) => solved,
            Err(status) => {
                warn!("HiGHS failed to run: {:?}", status);
                return SolveOutcome::failed();
            }
        };

        let model_status = solved.status();
        debug!(
            "HiGHS finished with {:?} in {:?}",
            model_status,
            started.elapsed()
        );

        let (solver_ok, optimal) = classify(model_status);

        // Only an optimal run carries values worth reporting
        let values = optimal.then(|| solved.get_solution().columns().to_vec());

        SolveOutcome {
            solver_ok,
            optimal,
            values,
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
