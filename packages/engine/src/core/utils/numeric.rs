//! Numeric sanitizing helpers.
//!
//! Host input (pointer movement, text metrics) can carry NaN. Everything that
//! crosses into the simulation goes through these first.

/// Symmetric clamp to `[-max, max]`. NaN collapses to zero; infinities
/// saturate with their sign.
#[inline]
pub fn clamp_abs(v: f32, max: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(-max, max) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_abs_keeps_sign() {
        assert_eq!(clamp_abs(20.0, 14.0), 14.0);
        assert_eq!(clamp_abs(-20.0, 14.0), -14.0);
        assert_eq!(clamp_abs(-3.0, 14.0), -3.0);
    }

    #[test]
    fn clamp_abs_nan_is_zero() {
        assert_eq!(clamp_abs(f32::NAN, 14.0), 0.0);
    }

    #[test]
    fn clamp_abs_saturates_infinities() {
        assert_eq!(clamp_abs(f32::INFINITY, 14.0), 14.0);
        assert_eq!(clamp_abs(f32::NEG_INFINITY, 14.0), -14.0);
    }
}
