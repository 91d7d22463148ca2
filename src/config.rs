use std::env;

use crate::domain::solver::SolverConfig;

const DEFAULT_PORT: u16 = 9000;
const DEFAULT_JSON_LIMIT: usize = 2 * 1024 * 1024; // 2 MB

/// Service settings read from the environment (and `.env` via dotenv)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub json_limit: usize,
    pub solver: SolverConfig,
    pub sentry_dsn: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            port: DEFAULT_PORT,
            json_limit: DEFAULT_JSON_LIMIT,
            solver: SolverConfig::default(),
            sentry_dsn: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let port = lookup("PORT")
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let json_limit = lookup("JSON_PAYLOAD_LIMIT")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.json_limit);

        let time_limit = lookup("SOLVER_TIME_LIMIT")
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|limit| limit.is_finite() && *limit > 0.0);

        let presolve = lookup("SOLVER_PRESOLVE")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.solver.presolve);

        let verbose = lookup("SOLVER_VERBOSE")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.solver.verbose);

        let sentry_dsn = lookup("SENTRY_DSN").filter(|dsn| !dsn.trim().is_empty());

        AppConfig {
            port,
            json_limit,
            solver: SolverConfig {
                time_limit,
                presolve,
                verbose,
            },
            sentry_dsn,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
