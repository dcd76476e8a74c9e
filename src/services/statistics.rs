/// Summary-statistic helpers for trial results.
///
/// - Empty input => `None`.
/// - `sample_std_dev` divides by `n - 1` and therefore needs at least two
///   values; a single value has no spread estimate and also yields `None`.

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let sum_of_squares: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    Some((sum_of_squares / (values.len() as f64 - 1.0)).sqrt())
}
