/// Free/paying user counts at one point in time.
///
/// Counts are signed on purpose: the monthly transition rule does not clamp
/// at zero, so extreme churn rates can drive a population negative and the
/// result is surfaced as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Population {
    pub free_users: i64,
    pub paying_users: i64,
}

impl Population {
    pub fn new(free_users: i64, paying_users: i64) -> Self {
        Self {
            free_users,
            paying_users,
        }
    }
}
