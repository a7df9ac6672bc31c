//! Rotation by an angle about a unit axis.

use crate::matrix::Vector3;
use std::fmt;
use tracing::debug;

/// Axis used whenever no direction can be derived: zero-length input axes, zero
/// rotation vectors, and quaternions with no imaginary part.
pub const DEFAULT_AXIS: Vector3 = Vector3 {
    x: 1.0,
    y: 0.0,
    z: 0.0,
};

/// A rotation of `angle` radians about `axis`, counterclockwise when looking
/// from the tip of the axis toward the origin.
///
/// The axis is always stored with unit length.
///
/// ```
/// use rotation_core::{AxisAngle, Vector3};
///
/// let aa = AxisAngle::new(Vector3::new(0.0, 0.0, 2.0), 0.5);
/// assert_eq!(aa.axis(), Vector3::z_axis());
/// assert_eq!(aa.angle(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisAngle {
    axis: Vector3,
    angle: f64,
}

impl AxisAngle {
    /// Normalizes `axis`; a zero-length axis is replaced by [`DEFAULT_AXIS`].
    pub fn new(axis: Vector3, angle: f64) -> Self {
        let unit = axis.normalize();
        if unit.magnitude_squared() == 0.0 {
            debug!(angle, "zero-length rotation axis, using default X axis");
            return Self {
                axis: DEFAULT_AXIS,
                angle,
            };
        }
        Self { axis: unit, angle }
    }

    /// Skips normalization for axes the caller has already divided by their length.
    pub(crate) fn from_unit_axis(axis: Vector3, angle: f64) -> Self {
        Self { axis, angle }
    }

    pub fn identity() -> Self {
        Self {
            axis: DEFAULT_AXIS,
            angle: 0.0,
        }
    }

    /// Builds from a rotation vector whose direction is the axis and whose
    /// length is the angle.
    pub fn from_rotation_vector(v: Vector3) -> Self {
        let angle = v.magnitude();
        if angle == 0.0 {
            return Self::identity();
        }
        Self {
            axis: v.normalize(),
            angle,
        }
    }

    pub fn to_rotation_vector(&self) -> Vector3 {
        self.axis * self.angle
    }

    #[inline]
    pub fn axis(&self) -> Vector3 {
        self.axis
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for AxisAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AxisAngle(axis={}, angle={:.9})", self.axis, self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_ulp_lt;
    use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

    #[test]
    fn test_new_normalizes_axis() {
        let aa = AxisAngle::new(Vector3::new(1.0, 1.0, 1.0), 1.0);
        let expected = 1.0 / 3.0_f64.sqrt();
        assert_ulp_lt!(aa.axis().x, expected, 4);
        assert_ulp_lt!(aa.axis().y, expected, 4);
        assert_ulp_lt!(aa.axis().z, expected, 4);
        assert_eq!(aa.angle(), 1.0);
    }

    #[test]
    fn test_new_keeps_direction_of_huge_axis() {
        let aa = AxisAngle::new(Vector3::new(0.0, 1e200, 1e200), 1.0);
        assert_eq!(aa.axis().x, 0.0);
        assert_ulp_lt!(aa.axis().y, FRAC_1_SQRT_2, 4);
        assert_ulp_lt!(aa.axis().z, FRAC_1_SQRT_2, 4);
        assert_eq!(aa.angle(), 1.0);
    }

    #[test]
    fn test_new_keeps_direction_of_tiny_axis() {
        let aa = AxisAngle::new(Vector3::new(0.0, 1e-200, 0.0), 1.0);
        assert_eq!(aa.axis(), Vector3::y_axis());

        let aa = AxisAngle::new(Vector3::new(-3e-300, 0.0, 4e-300), 0.25);
        assert_ulp_lt!(aa.axis().x, -0.6, 4);
        assert_ulp_lt!(aa.axis().z, 0.8, 4);
    }

    #[test]
    fn test_zero_axis_defaults_to_x() {
        let aa = AxisAngle::new(Vector3::zeros(), 0.7);
        assert_eq!(aa.axis(), DEFAULT_AXIS);
        assert_eq!(aa.angle(), 0.7);
    }

    #[test]
    fn test_identity() {
        let aa = AxisAngle::identity();
        assert_eq!(aa.axis(), Vector3::x_axis());
        assert_eq!(aa.angle(), 0.0);
        assert_eq!(AxisAngle::default(), aa);
    }

    #[test]
    fn test_rotation_vector() {
        let aa = AxisAngle::from_rotation_vector(Vector3::new(0.0, -0.5, 0.0));
        assert_eq!(aa.axis(), Vector3::new(0.0, -1.0, 0.0));
        assert_eq!(aa.angle(), 0.5);
        assert_eq!(aa.to_rotation_vector(), Vector3::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn test_rotation_vector_with_huge_length() {
        let aa = AxisAngle::from_rotation_vector(Vector3::new(1e200, 0.0, -1e200));
        assert_ulp_lt!(aa.angle(), SQRT_2 * 1e200, 4);
        assert_ulp_lt!(aa.axis().x, FRAC_1_SQRT_2, 4);
        assert_ulp_lt!(aa.axis().z, -FRAC_1_SQRT_2, 4);
    }

    #[test]
    fn test_zero_rotation_vector_is_identity() {
        assert_eq!(
            AxisAngle::from_rotation_vector(Vector3::zeros()),
            AxisAngle::identity()
        );
    }

    #[test]
    fn test_display() {
        let s = format!("{}", AxisAngle::identity());
        assert!(s.starts_with("AxisAngle(axis=Vector3(1.000000000"));
        assert!(s.ends_with("angle=0.000000000)"));
    }
}
