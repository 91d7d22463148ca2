use indexmap::IndexMap;

use crate::domain::index::VariableIndex;
use crate::domain::normalize::CanonicalData;
use crate::domain::solver::SolveOutcome;
use crate::models::{AssetTable, ModelOutput, ModelResponse, SolveStatus};

/// Collapse a solver outcome into the two-way status code
pub fn solution_status(outcome: &SolveOutcome) -> SolveStatus {
    if outcome.is_optimal() {
        SolveStatus::Optimal
    } else {
        SolveStatus::NotSolved
    }
}

/// Read weights and trades for every asset out of a solver outcome.
///
/// The full asset × time-point and asset × period shape is always returned;
/// entries without a solved value are `None`.
pub fn get_results(data: &CanonicalData, outcome: &SolveOutcome) -> ModelResponse {
    let index = VariableIndex::for_data(data);

    // A value vector of the wrong length cannot be mapped back onto columns
    let values = outcome
        .values
        .as_deref()
        .filter(|values| values.len() == index.len());

    let value_at = |column: usize| -> Option<f64> {
        values
            .and_then(|values| values.get(column).copied())
            .filter(|value| value.is_finite())
    };

    let table = |keys: std::ops::RangeInclusive<usize>, column: &dyn Fn(usize, usize) -> usize| {
        data.assets
            .iter()
            .enumerate()
            .map(|(a, asset)| {
                let row: IndexMap<String, Option<f64>> = keys
                    .clone()
                    .map(|t| (t.to_string(), value_at(column(a, t))))
                    .collect();
                (asset.clone(), row)
            })
            .collect::<AssetTable>()
    };

    let weights = table(data.time_point_range(), &|a, t| index.weight(a, t));
    let trades = table(data.period_range(), &|a, t| index.trade(a, t));

    ModelResponse {
        output: ModelOutput { weights, trades },
        status: solution_status(outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize::Parameters;

    fn data() -> CanonicalData {
        CanonicalData {
            assets: vec!["CASH".to_string(), "AAPL".to_string()],
            cash_index: Some(0),
            periods: 2,
            returns: vec![vec![0.0, 0.0], vec![0.01, 0.02]],
            initial_weights: vec![1.0, 0.0],
            parameters: Parameters::default(),
        }
    }

    #[test]
    fn test_solution_status_requires_clean_optimal_run() {
        let optimal = SolveOutcome {
            solver_ok: true,
            optimal: true,
            values: None,
        };
        let not_ok = SolveOutcome {
            solver_ok: false,
            ..optimal.clone()
        };
        let not_optimal = SolveOutcome {
            optimal: false,
            ..optimal.clone()
        };

        assert_eq!(solution_status(&optimal), SolveStatus::Optimal);
        assert_eq!(solution_status(&not_ok), SolveStatus::NotSolved);
        assert_eq!(solution_status(&not_optimal), SolveStatus::NotSolved);
        assert_eq!(solution_status(&SolveOutcome::failed()), SolveStatus::NotSolved);
    }

    #[test]
    fn test_get_results_maps_columns_to_tables() {
        let data = data();
        let index = VariableIndex::for_data(&data);
        let mut values = vec![0.0; index.len()];
        values[index.weight(1, 2)] = 0.25;
        values[index.trade(0, 2)] = -0.5;

        let response = get_results(
            &data,
            &SolveOutcome {
                solver_ok: true,
                optimal: true,
                values: Some(values),
            },
        );

        assert_eq!(response.status, SolveStatus::Optimal);
        assert_eq!(response.output.weights["AAPL"]["2"], Some(0.25));
        assert_eq!(response.output.weights["AAPL"]["1"], Some(0.0));
        assert_eq!(response.output.trades["CASH"]["2"], Some(-0.5));
    }

    #[test]
    fn test_get_results_keeps_full_shape() {
        let response = get_results(&data(), &SolveOutcome::failed());
        let output = &response.output;

        assert_eq!(
            output.weights.keys().collect::<Vec<_>>(),
            vec!["CASH", "AAPL"]
        );
        assert_eq!(output.trades.keys().collect::<Vec<_>>(), vec!["CASH", "AAPL"]);
        for row in output.weights.values() {
            assert_eq!(row.keys().collect::<Vec<_>>(), vec!["1", "2", "3"]);
        }
        for row in output.trades.values() {
            assert_eq!(row.keys().collect::<Vec<_>>(), vec!["1", "2"]);
        }
    }

    #[test]
    fn test_get_results_without_values_is_all_null() {
        let response = get_results(&data(), &SolveOutcome::failed());
        assert_eq!(response.status, SolveStatus::NotSolved);
        assert!(response
            .output
            .weights
            .values()
            .chain(response.output.trades.values())
            .flat_map(|row| row.values())
            .all(Option::is_none));
    }

    #[test]
    fn test_get_results_ignores_mismatched_values() {
        let response = get_results(
            &data(),
            &SolveOutcome {
                solver_ok: true,
                optimal: true,
                values: Some(vec![1.0; 3]),
            },
        );
        assert_eq!(response.output.weights["CASH"]["1"], None);
    }

    #[test]
    fn test_get_results_serializes_nulls_and_status_code() {
        let response = get_results(&data(), &SolveOutcome::failed());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], 1);
        assert!(json["output"]["weights"]["CASH"]["3"].is_null());
        assert!(json["output"]["trades"]["AAPL"]["1"].is_null());
    }
}
