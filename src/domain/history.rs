use chrono::NaiveDate;

/// One observed month of the product's funnel: how many users arrived on each
/// tier and which fractions upgraded or churned.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyObservation {
    pub month: NaiveDate,
    pub new_free_users: i64,
    pub new_paying_users: i64,
    pub upgrade_rate: f64,
    pub free_churn_rate: f64,
    pub paying_churn_rate: f64,
}

/// The five historical series the simulation resamples from, split by
/// quantity. Values are used as an empirical distribution (drawn with
/// replacement), never fitted to a parametric form.
#[derive(Debug, Clone)]
pub struct RateHistory {
    pub upgrade_rates: Vec<f64>,
    pub free_churn_rates: Vec<f64>,
    pub paying_churn_rates: Vec<f64>,
    pub new_free_users: Vec<i64>,
    pub new_paying_users: Vec<i64>,
}

impl RateHistory {
    pub fn from_observations(observations: &[MonthlyObservation]) -> Self {
        Self {
            upgrade_rates: observations.iter().map(|o| o.upgrade_rate).collect(),
            free_churn_rates: observations.iter().map(|o| o.free_churn_rate).collect(),
            paying_churn_rates: observations.iter().map(|o| o.paying_churn_rate).collect(),
            new_free_users: observations.iter().map(|o| o.new_free_users).collect(),
            new_paying_users: observations.iter().map(|o| o.new_paying_users).collect(),
        }
    }

    /// True if any of the five series has no observations.
    pub fn has_empty_series(&self) -> bool {
        self.upgrade_rates.is_empty()
            || self.free_churn_rates.is_empty()
            || self.paying_churn_rates.is_empty()
            || self.new_free_users.is_empty()
            || self.new_paying_users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn observation(month: NaiveDate, new_free: i64) -> MonthlyObservation {
        MonthlyObservation {
            month,
            new_free_users: new_free,
            new_paying_users: 2,
            upgrade_rate: 0.004,
            free_churn_rate: 0.06,
            paying_churn_rate: 0.02,
        }
    }

    #[test]
    fn from_observations_splits_into_series() {
        let observations = vec![
            observation(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), 480),
            observation(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(), 510),
        ];

        let history = RateHistory::from_observations(&observations);

        assert_eq!(history.new_free_users, vec![480, 510]);
        assert_eq!(history.new_paying_users, vec![2, 2]);
        assert_eq!(history.upgrade_rates, vec![0.004, 0.004]);
        assert_eq!(history.free_churn_rates, vec![0.06, 0.06]);
        assert_eq!(history.paying_churn_rates, vec![0.02, 0.02]);
        assert!(!history.has_empty_series());
    }

    #[test]
    fn empty_observations_yield_empty_series() {
        let history = RateHistory::from_observations(&[]);
        assert!(history.has_empty_series());
    }
}
