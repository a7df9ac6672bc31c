//! Conversions between the four rotation representations.
//!
//! Every pair is connected by `From`/`Into`:
//!
//! | From \ To | Quaternion | RotationMatrix | AxisAngle | EulerAngles |
//! |-----------|------------|----------------|-----------|-------------|
//! | Quaternion | - | closed form | closed form | via matrix |
//! | RotationMatrix | trace method | - | via quaternion | closed form |
//! | AxisAngle | closed form | via quaternion | - | via matrix |
//! | EulerAngles | via matrix | closed form | via matrix | [`to_sequence`](crate::EulerAngles::to_sequence) |
//!
//! None of these can fail. Inputs that do not describe a rotation (zero or
//! unnormalized quaternions, non-orthonormal matrices) still map to a fixed
//! result:
//!
//! - The zero quaternion converts to the identity matrix.
//! - A quaternion with zero imaginary part converts to a zero angle about
//!   [`DEFAULT_AXIS`].
//! - A matrix never gets validated; the trace method runs on whatever it holds,
//!   so the all-zero matrix gives `(0.5, 0, 0, 0)`.
//!
//! Matrix → quaternion makes no attempt to pick a canonical sign: the hemisphere
//! of the result is whatever the dominant-diagonal branch produces, so Euler →
//! quaternion for `xzy`, `yxz`, `zyx`, `xzx` and `zyz` may come out as `-q`
//! relative to other libraries, with the axis-angle reading `2π - θ` about the
//! opposite axis for the same rotation.
//!
//! # Unnormalized Quaternions
//!
//! Quaternion → matrix uses the raw components, so a quaternion of norm `n`
//! yields a matrix that is not orthonormal. Quaternion → axis-angle normalizes
//! the axis but takes the angle from the raw `w`, clamped into `[-1, 1]`; the
//! angle is only correct for unit input. Normalize first when in doubt:
//!
//! ```
//! use rotation_core::{AxisAngle, Quaternion};
//!
//! let q = Quaternion::new(0.0, 1.0, -3.0, 2.0);
//! let raw = AxisAngle::from(q);
//! let unit = AxisAngle::from(q.normalize());
//!
//! assert!((raw.axis() - unit.axis()).magnitude() < 1e-15);
//! assert_eq!(raw.angle(), 0.0);
//! assert!((unit.angle() - 2.0137074).abs() < 1e-7);
//! ```

use crate::axis_angle::{AxisAngle, DEFAULT_AXIS};
use crate::euler::{EulerAngles, Sequence};
use crate::math;
use crate::matrix::RotationMatrix;
use crate::quaternion::Quaternion;
use tracing::debug;

/// Diagonal entry that drives the trace method when the trace is not positive.
///
/// Ties go to the earliest entry, so the choice is reproducible for matrices
/// like the all-zero one where all three are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DominantDiagonal {
    M00,
    M11,
    M22,
}

impl DominantDiagonal {
    fn select(m00: f64, m11: f64, m22: f64) -> Self {
        if m00 >= m11 && m00 >= m22 {
            DominantDiagonal::M00
        } else if m11 >= m22 {
            DominantDiagonal::M11
        } else {
            DominantDiagonal::M22
        }
    }
}

impl From<Quaternion> for RotationMatrix {
    /// Uses the components as given, without normalizing.
    fn from(q: Quaternion) -> Self {
        if q.is_zero() {
            debug!("zero quaternion, using identity matrix");
            return RotationMatrix::identity();
        }

        let Quaternion { x, y, z, w } = q;
        let (x2, y2, z2) = (2.0 * x, 2.0 * y, 2.0 * z);
        let (xx, yy, zz) = (x * x2, y * y2, z * z2);
        let (xy, xz, yz) = (x * y2, x * z2, y * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        RotationMatrix::from_array([
            [1.0 - yy - zz, xy - wz, xz + wy],
            [xy + wz, 1.0 - xx - zz, yz - wx],
            [xz - wy, yz + wx, 1.0 - xx - yy],
        ])
    }
}

impl From<RotationMatrix> for Quaternion {
    fn from(m: RotationMatrix) -> Self {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = *m.elements();
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            let s = 2.0 * math::sqrt(trace + 1.0);
            return Quaternion::new((m21 - m12) / s, (m02 - m20) / s, (m10 - m01) / s, 0.25 * s);
        }

        match DominantDiagonal::select(m00, m11, m22) {
            DominantDiagonal::M00 => {
                let s = 2.0 * math::sqrt(1.0 + m00 - m11 - m22);
                Quaternion::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
            }
            DominantDiagonal::M11 => {
                let s = 2.0 * math::sqrt(1.0 + m11 - m00 - m22);
                Quaternion::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
            }
            DominantDiagonal::M22 => {
                let s = 2.0 * math::sqrt(1.0 + m22 - m00 - m11);
                Quaternion::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
            }
        }
    }
}

impl From<Quaternion> for AxisAngle {
    /// Axis from the normalized imaginary part, angle from the raw `w`.
    fn from(q: Quaternion) -> Self {
        let v = q.vector();
        if v.magnitude() > 0.0 {
            AxisAngle::from_unit_axis(v.normalize(), 2.0 * math::acos_clamped(q.w))
        } else {
            debug!(w = q.w, "quaternion has no imaginary part, using zero rotation");
            AxisAngle::from_unit_axis(DEFAULT_AXIS, 0.0)
        }
    }
}

impl From<AxisAngle> for Quaternion {
    fn from(aa: AxisAngle) -> Self {
        let (s, c) = math::sincos(0.5 * aa.angle());
        let v = aa.axis() * s;
        Quaternion::new(v.x, v.y, v.z, c)
    }
}

impl From<RotationMatrix> for AxisAngle {
    fn from(m: RotationMatrix) -> Self {
        Quaternion::from(m).into()
    }
}

impl From<AxisAngle> for RotationMatrix {
    fn from(aa: AxisAngle) -> Self {
        Quaternion::from(aa).into()
    }
}

impl<S: Sequence> From<EulerAngles<S>> for RotationMatrix {
    fn from(e: EulerAngles<S>) -> Self {
        S::KIND.compose(e.x, e.y, e.z)
    }
}

impl<S: Sequence> From<RotationMatrix> for EulerAngles<S> {
    fn from(m: RotationMatrix) -> Self {
        EulerAngles::from_array(S::KIND.decompose(&m))
    }
}

impl<S: Sequence> From<EulerAngles<S>> for Quaternion {
    fn from(e: EulerAngles<S>) -> Self {
        RotationMatrix::from(e).into()
    }
}

impl<S: Sequence> From<Quaternion> for EulerAngles<S> {
    fn from(q: Quaternion) -> Self {
        RotationMatrix::from(q).into()
    }
}

impl<S: Sequence> From<EulerAngles<S>> for AxisAngle {
    fn from(e: EulerAngles<S>) -> Self {
        RotationMatrix::from(e).into()
    }
}

impl<S: Sequence> From<AxisAngle> for EulerAngles<S> {
    fn from(aa: AxisAngle) -> Self {
        RotationMatrix::from(aa).into()
    }
}
