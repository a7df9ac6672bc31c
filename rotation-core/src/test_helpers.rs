//! Float comparison helpers shared by unit and integration tests.
//!
//! Conversions chain several transcendental calls, so exact equality is rarely
//! meaningful. The ULP helpers compare in units in the last place, which scales
//! with magnitude; with a budget of 0 they pin results that must come out
//! bit-exact, such as the `±π` angles of half turns. The matrix and quaternion
//! helpers compare by absolute difference against reference values.

use crate::{Quaternion, RotationMatrix};

/// Maps the bit pattern of `x` onto a line where adjacent floats are adjacent
/// integers, with `-0.0` and `0.0` one step apart.
fn ordered_bits(x: f64) -> u64 {
    const SIGN: u64 = 1 << 63;
    let bits = x.to_bits();
    if bits & SIGN != 0 {
        !bits
    } else {
        bits | SIGN
    }
}

/// Number of representable doubles between `a` and `b`.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    ordered_bits(a).abs_diff(ordered_bits(b))
}

/// Panics unless `a` and `b` are within `max_ulp` steps of each other.
///
/// Zeros of either sign compare equal. A `max_ulp` of 0 asserts bit-identical
/// results, which is what distinguishes `π` from `-π` in angles that come out of
/// `atan2` on signed zeros.
#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(a.is_finite() && b.is_finite(), "{}: non-finite value, got {} and {}", ctx, a, b);
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: {} and {} are {} ULP apart (allowed {})",
        ctx,
        a,
        b,
        d,
        max_ulp
    );
}

#[track_caller]
pub fn assert_float_eq(a: f64, b: f64, max_ulp: u64) {
    assert_ulp_le(a, b, max_ulp, "float comparison");
}

/// Compares an Euler angle triple element by element in ULP.
#[track_caller]
pub fn assert_angles_ulp(actual: [f64; 3], expected: [f64; 3], max_ulp: u64, ctx: &str) {
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_ulp_le(*a, *e, max_ulp, &format!("{} angle {} of {:?}", ctx, i, actual));
    }
}

/// Asserts every element of `actual` is within `tol` of `expected`.
#[track_caller]
pub fn assert_matrix_near(actual: &RotationMatrix, expected: [[f64; 3]; 3], tol: f64) {
    let diff = actual.max_difference(&RotationMatrix::from_array(expected));
    assert!(
        diff <= tol,
        "matrix differs by {:e} (tolerance {:e}):\n{}",
        diff,
        tol,
        actual
    );
}

/// Asserts `actual` is within `tol` of `(x, y, z, w)` component-wise.
#[track_caller]
pub fn assert_quaternion_near(actual: &Quaternion, expected: [f64; 4], tol: f64) {
    let got = actual.to_array();
    for (i, (a, e)) in got.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "component {} of {} differs from {:?} (tolerance {:e})",
            i,
            actual,
            expected,
            tol
        );
    }
}

/// [`assert_ulp_le`] with the compared expressions in the failure message.
#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!(
                "ULP check failed: {} vs {} (max_ulp={})",
                stringify!($a),
                stringify!($b),
                $max_ulp
            ),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}
