use thiserror::Error;

use crate::domain::history::RateHistory;
use crate::domain::population::Population;
use crate::services::forecast_types::{ForecastOutput, ForecastReport};
use crate::services::history_yaml::{HistoryYamlError, deserialize_history_from_yaml_str};
use crate::services::projection::{ProjectionError, run_monte_carlo, summarize};

#[derive(Error, Debug)]
pub enum ForecastError {
    #[error("failed to read history file: {0}")]
    ReadHistory(#[from] std::io::Error),
    #[error("failed to parse history yaml: {0}")]
    ParseHistory(#[from] HistoryYamlError),
    #[error("projection failed: {0}")]
    Projection(#[from] ProjectionError),
}

pub fn forecast_from_history_file(
    history_path: &str,
    trials: usize,
    months: usize,
    initial_free_users: i64,
    initial_paying_users: i64,
    seed: Option<u64>,
) -> Result<ForecastOutput, ForecastError> {
    let history_yaml = std::fs::read_to_string(history_path)?;
    let observations = deserialize_history_from_yaml_str(&history_yaml)?;
    let history = RateHistory::from_observations(&observations);
    let initial = Population::new(initial_free_users, initial_paying_users);

    let result = run_monte_carlo(trials, months, initial, &history, seed)?;
    let summary = summarize(&result)?;

    Ok(ForecastOutput {
        report: ForecastReport {
            data_source: data_source_name(history_path),
            trials,
            months,
            initial_free_users,
            initial_paying_users,
            projected_paying_users: summary.projected_paying_users,
            mean: summary.mean,
            std_dev: summary.std_dev,
            lower_bound: summary.lower_bound,
            upper_bound: summary.upper_bound,
        },
        terminal_paying_users: result.terminal_paying_users(),
    })
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
