//! Rotation matrix to Euler angles.
//!
//! The middle angle comes from a single matrix entry: its sine for Tait-Bryan
//! orders, its cosine for proper orders. The outer angles come from `atan2` of
//! entry pairs in the row and column of that entry. When the middle entry reaches
//! ±1 the outer axes align (gimbal lock), only their combination is observable,
//! and the whole combined rotation goes into the third angle with the first set to
//! zero.
//!
//! Signs in the `atan2` arguments are applied by negating entries, never by
//! flipping the result, so a signed zero in the input survives into `atan2`. This
//! is what makes the all-zero matrix decompose to `π` rather than `0` for half of
//! the proper orders.

use super::EulerSequence;
use crate::math;
use crate::matrix::RotationMatrix;
use tracing::trace;

/// `(y, x)` arguments for `atan2`.
type Atan2Args = (f64, f64);

struct Extraction {
    middle: f64,
    first: Atan2Args,
    third: Atan2Args,
    locked_third: Atan2Args,
}

impl EulerSequence {
    /// Recovers `[x, y, z]` such that `self.compose(x, y, z)` reproduces `m`.
    ///
    /// The middle angle lies in `[-π/2, π/2]` for Tait-Bryan orders and `[0, π]`
    /// for proper orders; the outer angles lie in `[-π, π]`.
    ///
    /// ```
    /// use rotation_core::EulerSequence;
    ///
    /// let m = EulerSequence::Zxz.compose(0.4, 1.2, -2.0);
    /// let [x, y, z] = EulerSequence::Zxz.decompose(&m);
    /// assert!((x - 0.4).abs() < 1e-12);
    /// assert!((y - 1.2).abs() < 1e-12);
    /// assert!((z + 2.0).abs() < 1e-12);
    /// ```
    pub fn decompose(self, m: &RotationMatrix) -> [f64; 3] {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = *m.elements();

        let extraction = match self {
            EulerSequence::Xyz => Extraction {
                middle: m02,
                first: (-m12, m22),
                third: (-m01, m00),
                locked_third: (m10, m11),
            },
            EulerSequence::Xzy => Extraction {
                middle: -m01,
                first: (m21, m11),
                third: (m02, m00),
                locked_third: (-m20, m22),
            },
            EulerSequence::Yxz => Extraction {
                middle: -m12,
                first: (m02, m22),
                third: (m10, m11),
                locked_third: (-m01, m00),
            },
            EulerSequence::Yzx => Extraction {
                middle: m10,
                first: (-m20, m00),
                third: (-m12, m11),
                locked_third: (m21, m22),
            },
            EulerSequence::Zxy => Extraction {
                middle: m21,
                first: (-m01, m11),
                third: (-m20, m22),
                locked_third: (m02, m00),
            },
            EulerSequence::Zyx => Extraction {
                middle: -m20,
                first: (m10, m00),
                third: (m21, m22),
                locked_third: (-m12, m11),
            },
            EulerSequence::Xyx => Extraction {
                middle: m00,
                first: (m10, -m20),
                third: (m01, m02),
                locked_third: (-m12, m11),
            },
            EulerSequence::Xzx => Extraction {
                middle: m00,
                first: (m20, m10),
                third: (m02, -m01),
                locked_third: (m21, m22),
            },
            EulerSequence::Yxy => Extraction {
                middle: m11,
                first: (m01, m21),
                third: (m10, -m12),
                locked_third: (m02, m00),
            },
            EulerSequence::Yzy => Extraction {
                middle: m11,
                first: (m21, -m01),
                third: (m12, m10),
                locked_third: (-m20, m22),
            },
            EulerSequence::Zxz => Extraction {
                middle: m22,
                first: (m02, -m12),
                third: (m20, m21),
                locked_third: (-m01, m00),
            },
            EulerSequence::Zyz => Extraction {
                middle: m22,
                first: (m12, m02),
                third: (m21, -m20),
                locked_third: (m10, m11),
            },
        };

        let middle = math::clamp_unit(extraction.middle);
        let y = if self.is_proper() {
            math::acos_clamped(middle)
        } else {
            math::asin_clamped(middle)
        };

        if middle.abs() < 1.0 {
            let (fy, fx) = extraction.first;
            let (ty, tx) = extraction.third;
            [math::atan2(fy, fx), y, math::atan2(ty, tx)]
        } else {
            trace!(sequence = %self, middle, "gimbal lock, folding rotation into third angle");
            let (ly, lx) = extraction.locked_third;
            [0.0, y, math::atan2(ly, lx)]
        }
    }
}
