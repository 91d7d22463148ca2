use crate::domain::model::LinearProgram;

/// Solver settings injected into an adapter at construction
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Wall-clock limit in seconds; reaching it counts as not solved
    pub time_limit: Option<f64>,
    pub presolve: bool,
    /// Let the solver write its own log to stdout
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            time_limit: None,
            presolve: true,
            verbose: false,
        }
    }
}

/// What came back from one solver invocation
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    /// The solver ran without reporting an error
    pub solver_ok: bool,
    /// The solver terminated at an optimum
    pub optimal: bool,
    /// One value per variable in column order, when a solution exists
    pub values: Option<Vec<f64>>,
}

impl SolveOutcome {
    pub fn failed() -> Self {
        SolveOutcome {
            solver_ok: false,
            optimal: false,
            values: None,
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.solver_ok && self.optimal
    }
}

/// Common interface for LP solvers
pub trait Solver: Send + Sync {
    /// Solve a linear program.
    ///
    /// Never fails: any solver problem is reported through the outcome so
    /// the caller always gets a result to extract from.
    fn solve(&self, problem: &LinearProgram) -> SolveOutcome;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}
