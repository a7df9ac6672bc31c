//! Floating-point primitives used by the conversion routines.
//!
//! Everything goes through `libm` so results do not depend on the platform's
//! intrinsic implementations. The inverse cosine and sine are only ever called
//! through [`acos_clamped`] and [`asin_clamped`]: matrix entries and quaternion
//! components drift just outside `[-1, 1]` after a few multiplications, and an
//! unclamped call would return NaN.

#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Returns `(sin(x), cos(x))`.
#[inline]
pub fn sincos(x: f64) -> (f64, f64) {
    libm::sincos(x)
}

#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    libm::atan2(y, x)
}

/// `sqrt(x² + y²)` without intermediate overflow or underflow.
#[inline]
pub fn hypot(x: f64, y: f64) -> f64 {
    libm::hypot(x, y)
}

/// Saturates `x` into `[-1, 1]`. NaN passes through unchanged.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

#[inline]
pub fn acos_clamped(x: f64) -> f64 {
    libm::acos(clamp_unit(x))
}

#[inline]
pub fn asin_clamped(x: f64) -> f64 {
    libm::asin(clamp_unit(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HALF_PI, PI};

    #[test]
    fn test_clamped_inverse_trig_outside_domain() {
        assert_eq!(acos_clamped(1.0 + 1e-12), 0.0);
        assert_eq!(acos_clamped(-1.0 - 1e-12), PI);
        assert_eq!(asin_clamped(1.0 + 1e-12), HALF_PI);
        assert_eq!(asin_clamped(-1.0 - 1e-12), -HALF_PI);
    }

    #[test]
    fn test_clamp_unit_inside_domain_is_identity() {
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(-0.75), -0.75);
        assert!(clamp_unit(f64::NAN).is_nan());
    }

    #[test]
    fn test_atan2_signed_zero() {
        assert_eq!(atan2(0.0, -0.0), PI);
        assert_eq!(atan2(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_hypot_extreme_magnitudes() {
        assert_eq!(hypot(3.0, 4.0), 5.0);
        assert!((hypot(3e200, 4e200) / 5e200 - 1.0).abs() < 1e-15);
        assert!((hypot(3e-200, 4e-200) / 5e-200 - 1.0).abs() < 1e-15);
        assert_eq!(hypot(f64::MAX, 0.0), f64::MAX);
    }

    #[test]
    fn test_sincos() {
        let (s, c) = sincos(HALF_PI);
        assert!((s - 1.0).abs() < 1e-15);
        assert!(c.abs() < 1e-15);
    }
}
