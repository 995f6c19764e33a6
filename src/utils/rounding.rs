use crate::error::{CoreError, CoreResult};

/// Rounds `value` to `decimals` places, the way the reference tables were produced:
/// correctly rounded from the exact binary value rather than via `(x * 10^n).round()`,
/// which drifts on values such as 1.005.
pub fn round_to(value: f64, decimals: usize) -> CoreResult<f64> {
    if !value.is_finite() {
        return Err(CoreError::computation(format!("cannot round non-finite value {}", value)));
    }
    format!("{:.*}", decimals, value)
        .parse::<f64>()
        .map_err(|e| CoreError::computation(format!("rounding {} failed: {}", value, e)))
}
