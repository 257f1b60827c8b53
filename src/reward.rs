//! Trapezoid reward shaping.
//!
//! Every problem in the benchmark maps raw measurements (path length, region
//! count, Hamming distance) onto `[0, 1]` scores with the same shape: a
//! plateau where the measurement is fully satisfying, and linear falloff
//! toward the declared extremes on either side.

/// Maps `value` onto `[0, 1]` with a plateau at 1.0 over `[low, high]`.
///
/// - `value` in `[low, high]` scores 1.0.
/// - `value` below `low` falls off linearly toward `min`, reaching 0.0 at
///   `min` and clamping there.
/// - `value` above `high` falls off linearly toward `max`; pass `None` to
///   leave the upper side open (any value above the plateau still scores 1.0).
///
/// A degenerate falloff range (`low <= min` or `max <= high`) scores 0.0 for
/// values strictly outside the plateau on that side.
pub fn range_reward(value: f64, min: f64, low: f64, high: f64, max: Option<f64>) -> f64 {
    if value >= low && value <= high {
        return 1.0;
    }
    if value < low {
        let span = low - min;
        if span <= 0.0 {
            return 0.0;
        }
        return (1.0 - (low - value) / span).clamp(0.0, 1.0);
    }
    // value > high
    match max {
        None => 1.0,
        Some(max) => {
            let span = max - high;
            if span <= 0.0 {
                return 0.0;
            }
            (1.0 - (value - high) / span).clamp(0.0, 1.0)
        }
    }
}
