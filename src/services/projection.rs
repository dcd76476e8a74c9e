use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::domain::history::RateHistory;
use crate::domain::population::Population;
use crate::services::sampler;
use crate::services::statistics;

/// Half-width multiplier for a normal-approximation 95% interval.
const Z_95: f64 = 1.96;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("trials must be greater than zero")]
    InvalidTrials,
    #[error("historical rate series is empty")]
    EmptyHistory,
    #[error("no trial results to summarize")]
    EmptyResult,
}

/// Population snapshots for one trial, indexed by month. Element 0 is the
/// initial state, so the path has `months + 1` entries.
pub type TrialPath = Vec<Population>;

#[derive(Debug, Clone)]
pub struct MonteCarloResult {
    pub months: usize,
    pub paths: Vec<TrialPath>,
}

impl MonteCarloResult {
    /// Paying-user counts at the terminal month, one per trial.
    pub fn terminal_paying_users(&self) -> Vec<f64> {
        self.paths
            .iter()
            .filter_map(|path| path.get(self.months))
            .map(|state| state.paying_users as f64)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub projected_paying_users: i64,
}

/// Runs `trials` independent trials of `months` months each, all starting
/// from the same initial population and resampling from the same history.
///
/// Each trial gets its own `StdRng` seeded from `base seed + trial index`, so
/// a fixed seed reproduces the run bit-for-bit and the first T trials are
/// identical regardless of how many further trials are requested.
pub fn run_monte_carlo(
    trials: usize,
    months: usize,
    initial: Population,
    history: &RateHistory,
    seed: Option<u64>,
) -> Result<MonteCarloResult, ProjectionError> {
    if trials == 0 {
        return Err(ProjectionError::InvalidTrials);
    }
    if history.has_empty_series() {
        return Err(ProjectionError::EmptyHistory);
    }

    let base_seed = seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    let mut paths = Vec::with_capacity(trials);
    for trial in 0..trials {
        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(trial as u64));
        paths.push(run_trial_with_rng(initial, months, history, &mut rng));
    }

    Ok(MonteCarloResult { months, paths })
}

/// Advances the two populations month by month for one trial.
///
/// Per month there are five draws, in this fixed order: upgrade rate, free
/// churn rate, new-free count, paying churn rate, new-paying count. Users
/// moving between tiers are rounded half away from zero (`f64::round`).
/// Populations are not clamped at zero.
pub(crate) fn run_trial_with_rng<R: Rng + ?Sized>(
    initial: Population,
    months: usize,
    history: &RateHistory,
    rng: &mut R,
) -> TrialPath {
    let mut path = Vec::with_capacity(months + 1);
    let mut state = initial;
    path.push(state);

    for _ in 0..months {
        let upgrade_rate = sampler::draw(&history.upgrade_rates, rng).unwrap_or(0.0);
        let free_to_paying = round_count(state.free_users as f64 * upgrade_rate);

        let free_churn_rate = sampler::draw(&history.free_churn_rates, rng).unwrap_or(0.0);
        let free_churned = round_count(state.free_users as f64 * free_churn_rate);

        let new_free = sampler::draw(&history.new_free_users, rng).unwrap_or(0);

        let paying_churn_rate = sampler::draw(&history.paying_churn_rates, rng).unwrap_or(0.0);
        let paying_churned = round_count(state.paying_users as f64 * paying_churn_rate);

        let new_paying = sampler::draw(&history.new_paying_users, rng).unwrap_or(0);

        state = Population {
            free_users: state.free_users + new_free - free_to_paying - free_churned,
            paying_users: state.paying_users + new_paying - paying_churned + free_to_paying,
        };
        path.push(state);
    }

    path
}

fn round_count(value: f64) -> i64 {
    value.round() as i64
}

/// Mean, sample standard deviation (n - 1) and a symmetric 1.96-sigma bound
/// over the terminal-month paying-user counts. A single trial has no spread
/// estimate; its standard deviation is reported as zero.
pub fn summarize(result: &MonteCarloResult) -> Result<ProjectionSummary, ProjectionError> {
    let terminal = result.terminal_paying_users();
    let mean = statistics::mean(&terminal).ok_or(ProjectionError::EmptyResult)?;
    let std_dev = statistics::sample_std_dev(&terminal).unwrap_or(0.0);
    let bound = Z_95 * std_dev;

    Ok(ProjectionSummary {
        mean,
        std_dev,
        lower_bound: mean - bound,
        upper_bound: mean + bound,
        projected_paying_users: mean.round() as i64,
    })
}
