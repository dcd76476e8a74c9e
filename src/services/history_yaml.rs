use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::history::MonthlyObservation;

#[derive(Error, Debug)]
pub enum HistoryYamlError {
    #[error("failed to parse history yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid month label: {0}")]
    InvalidMonth(String),
    #[error("non-finite {field} for month {month}")]
    NonFiniteRate { month: String, field: &'static str },
}

#[derive(Deserialize)]
struct ObservationRecord {
    month: String,
    new_free_users: i64,
    new_paying_users: i64,
    upgrade_rate: f64,
    free_churn_rate: f64,
    paying_churn_rate: f64,
}

pub fn deserialize_history_from_yaml_str(
    yaml: &str,
) -> Result<Vec<MonthlyObservation>, HistoryYamlError> {
    let records: Vec<ObservationRecord> = serde_yaml::from_str(yaml)?;
    records.into_iter().map(observation_from_record).collect()
}

fn observation_from_record(
    record: ObservationRecord,
) -> Result<MonthlyObservation, HistoryYamlError> {
    let month = NaiveDate::parse_from_str(&record.month, "%Y-%m-%d")
        .map_err(|_| HistoryYamlError::InvalidMonth(record.month.clone()))?;

    ensure_finite(record.upgrade_rate, "upgrade_rate", &record.month)?;
    ensure_finite(record.free_churn_rate, "free_churn_rate", &record.month)?;
    ensure_finite(record.paying_churn_rate, "paying_churn_rate", &record.month)?;

    Ok(MonthlyObservation {
        month,
        new_free_users: record.new_free_users,
        new_paying_users: record.new_paying_users,
        upgrade_rate: record.upgrade_rate,
        free_churn_rate: record.free_churn_rate,
        paying_churn_rate: record.paying_churn_rate,
    })
}

fn ensure_finite(value: f64, field: &'static str, month: &str) -> Result<(), HistoryYamlError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(HistoryYamlError::NonFiniteRate {
            month: month.to_string(),
            field,
        })
    }
}
