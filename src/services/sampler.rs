use rand::Rng;
use rand::seq::SliceRandom;

/// Draws one element uniformly at random from a historical series, with
/// replacement. Draws are independent across calls, so the same historical
/// month may be picked repeatedly within a trial.
///
/// Returns `None` only for an empty series; callers validate non-empty input
/// at their boundary and report it as an input error.
pub fn draw<T: Copy, R: Rng + ?Sized>(series: &[T], rng: &mut R) -> Option<T> {
    series.choose(rng).copied()
}
