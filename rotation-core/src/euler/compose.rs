//! Euler angles to rotation matrix.
//!
//! Each sequence `abc` with angles `(x, y, z)` composes to
//! `R = R_a(x) · R_b(y) · R_c(z)` using the active elementary rotations of
//! [`RotationMatrix::about_x`] and friends. The products are expanded in closed
//! form below; `(s1, c1)`, `(s2, c2)` and `(s3, c3)` are the sine and cosine of
//! `x`, `y` and `z`.

use super::EulerSequence;
use crate::math;
use crate::matrix::RotationMatrix;

impl EulerSequence {
    /// Builds the rotation matrix for angles `(x, y, z)` under this sequence.
    ///
    /// ```
    /// use rotation_core::{EulerSequence, RotationMatrix};
    ///
    /// let m = EulerSequence::Zyx.compose(0.3, -0.2, 1.1);
    /// let expected = RotationMatrix::about_z(0.3)
    ///     * RotationMatrix::about_y(-0.2)
    ///     * RotationMatrix::about_x(1.1);
    /// assert!(m.max_difference(&expected) < 1e-14);
    /// ```
    pub fn compose(self, x: f64, y: f64, z: f64) -> RotationMatrix {
        let (s1, c1) = math::sincos(x);
        let (s2, c2) = math::sincos(y);
        let (s3, c3) = math::sincos(z);

        let m = match self {
            EulerSequence::Xyz => [
                [c2 * c3, -c2 * s3, s2],
                [c1 * s3 + c3 * s1 * s2, c1 * c3 - s1 * s2 * s3, -c2 * s1],
                [s1 * s3 - c1 * c3 * s2, c3 * s1 + c1 * s2 * s3, c1 * c2],
            ],
            EulerSequence::Xzy => [
                [c2 * c3, -s2, c2 * s3],
                [c1 * s2 * c3 + s1 * s3, c1 * c2, c1 * s2 * s3 - s1 * c3],
                [s1 * s2 * c3 - c1 * s3, s1 * c2, s1 * s2 * s3 + c1 * c3],
            ],
            EulerSequence::Yxz => [
                [c1 * c3 + s1 * s2 * s3, c3 * s1 * s2 - c1 * s3, c2 * s1],
                [c2 * s3, c2 * c3, -s2],
                [c1 * s2 * s3 - c3 * s1, c1 * c3 * s2 + s1 * s3, c1 * c2],
            ],
            EulerSequence::Yzx => [
                [c1 * c2, s1 * s3 - c1 * s2 * c3, c1 * s2 * s3 + s1 * c3],
                [s2, c2 * c3, -c2 * s3],
                [-s1 * c2, c1 * s3 + s1 * s2 * c3, c1 * c3 - s1 * s2 * s3],
            ],
            EulerSequence::Zxy => [
                [c1 * c3 - s1 * s2 * s3, -s1 * c2, c1 * s3 + s1 * s2 * c3],
                [s1 * c3 + c1 * s2 * s3, c1 * c2, s1 * s3 - c1 * s2 * c3],
                [-c2 * s3, s2, c2 * c3],
            ],
            EulerSequence::Zyx => [
                [c1 * c2, c1 * s2 * s3 - c3 * s1, s1 * s3 + c1 * c3 * s2],
                [c2 * s1, c1 * c3 + s1 * s2 * s3, c3 * s1 * s2 - c1 * s3],
                [-s2, c2 * s3, c2 * c3],
            ],
            EulerSequence::Xyx => [
                [c2, s2 * s3, s2 * c3],
                [s1 * s2, c1 * c3 - s1 * c2 * s3, -c1 * s3 - s1 * c2 * c3],
                [-c1 * s2, s1 * c3 + c1 * c2 * s3, c1 * c2 * c3 - s1 * s3],
            ],
            EulerSequence::Xzx => [
                [c2, -c3 * s2, s2 * s3],
                [c1 * s2, c1 * c2 * c3 - s1 * s3, -c3 * s1 - c1 * c2 * s3],
                [s1 * s2, c1 * s3 + c2 * c3 * s1, c1 * c3 - c2 * s1 * s3],
            ],
            EulerSequence::Yxy => [
                [c1 * c3 - c2 * s1 * s3, s1 * s2, c1 * s3 + c2 * c3 * s1],
                [s2 * s3, c2, -c3 * s2],
                [-c3 * s1 - c1 * c2 * s3, c1 * s2, c1 * c2 * c3 - s1 * s3],
            ],
            EulerSequence::Yzy => [
                [c1 * c2 * c3 - s1 * s3, -c1 * s2, c3 * s1 + c1 * c2 * s3],
                [c3 * s2, c2, s2 * s3],
                [-c1 * s3 - c2 * c3 * s1, s1 * s2, c1 * c3 - c2 * s1 * s3],
            ],
            EulerSequence::Zxz => [
                [c1 * c3 - c2 * s1 * s3, -c1 * s3 - c2 * c3 * s1, s1 * s2],
                [c3 * s1 + c1 * c2 * s3, c1 * c2 * c3 - s1 * s3, -c1 * s2],
                [s2 * s3, c3 * s2, c2],
            ],
            EulerSequence::Zyz => [
                [c1 * c2 * c3 - s1 * s3, -c3 * s1 - c1 * c2 * s3, c1 * s2],
                [c1 * s3 + c2 * c3 * s1, c1 * c3 - c2 * s1 * s3, s1 * s2],
                [-c3 * s2, s2 * s3, c2],
            ],
        };

        RotationMatrix::from_array(m)
    }
}
