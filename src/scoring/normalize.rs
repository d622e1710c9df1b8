use crate::constants::{SCORE_MAX, SCORE_MIN};

/// Maps `value` from `[lo, hi]` onto `[0, 5]`, clamping outside the range.
///
/// `NaN` maps to `0`. Requires `hi > lo`.
pub fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    debug_assert!(hi > lo, "normalize range must be non-empty: [{lo}, {hi}]");
    if value.is_nan() {
        return SCORE_MIN;
    }
    ((value - lo) / (hi - lo) * SCORE_MAX).clamp(SCORE_MIN, SCORE_MAX)
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
