use super::{EulerSequence, Sequence};
use crate::matrix::RotationMatrix;
use std::fmt;
use std::marker::PhantomData;

/// Three rotation angles in radians under the axis order `S`.
///
/// `x` turns about the first axis of the order, `y` about the second, `z` about
/// the third, whatever those axes are: in a `Zxz` value, `x` and `z` both turn
/// about Z.
///
/// ```
/// use rotation_core::{EulerAngles, EulerSequence, Zyx};
///
/// let e = EulerAngles::<Zyx>::new(0.1, 0.2, 0.3);
/// assert_eq!(e.sequence(), EulerSequence::Zyx);
/// assert_eq!(e.to_array(), [0.1, 0.2, 0.3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = ""))]
pub struct EulerAngles<S: Sequence> {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    sequence: PhantomData<S>,
}

impl<S: Sequence> EulerAngles<S> {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            sequence: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn from_array(angles: [f64; 3]) -> Self {
        Self::new(angles[0], angles[1], angles[2])
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The runtime identity of `S`.
    #[inline]
    pub fn sequence(&self) -> EulerSequence {
        S::KIND
    }

    /// Expresses the same rotation under another axis order.
    ///
    /// Goes through the rotation matrix, so angles come back in the ranges
    /// [`EulerSequence::decompose`] produces.
    ///
    /// ```
    /// use rotation_core::{EulerAngles, Xyz, Zxz, RotationMatrix};
    ///
    /// let e = EulerAngles::<Xyz>::new(0.3, -0.5, 1.2);
    /// let same = e.to_sequence::<Zxz>();
    ///
    /// let a = RotationMatrix::from(e);
    /// let b = RotationMatrix::from(same);
    /// assert!(a.max_difference(&b) < 1e-14);
    /// ```
    pub fn to_sequence<T: Sequence>(&self) -> EulerAngles<T> {
        EulerAngles::from(RotationMatrix::from(*self))
    }
}

impl<S: Sequence> Default for EulerAngles<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Sequence> std::ops::Neg for EulerAngles<S> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<S: Sequence> fmt::Display for EulerAngles<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EulerAngles<{}>(x={:.9}, y={:.9}, z={:.9})",
            S::KIND,
            self.x,
            self.y,
            self.z
        )
    }
}
