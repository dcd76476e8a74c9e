use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct ForecastReport {
    pub data_source: String,
    pub trials: usize,
    pub months: usize,
    pub initial_free_users: i64,
    pub initial_paying_users: i64,
    pub projected_paying_users: i64,
    pub mean: f64,
    pub std_dev: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct ForecastOutput {
    pub report: ForecastReport,
    pub terminal_paying_users: Vec<f64>,
}
