//! Quaternions in `(x, y, z, w)` order with `w` the scalar part.
//!
//! A unit quaternion `(sin(θ/2)·n, cos(θ/2))` encodes a rotation by `θ` about the
//! unit axis `n`. `q` and `-q` encode the same rotation.
//!
//! No invariant is enforced at construction. Unnormalized values are legal and
//! every conversion accepts them; see [`crate::conversions`] for how each one
//! treats the norm. The all-zero quaternion is read as "no rotation".
//!
//! ```
//! use rotation_core::{Quaternion, Vector3};
//!
//! // Hamilton product composes rotations: i * j = k.
//! assert_eq!(Quaternion::i() * Quaternion::j(), Quaternion::k());
//!
//! // Half turn about X flips Y.
//! let v = Quaternion::i().rotate_vector(Vector3::y_axis());
//! assert!((v.y + 1.0).abs() < 1e-15);
//! ```

use crate::math;
use crate::matrix::Vector3;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub const fn i() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub const fn j() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    pub const fn k() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0 && self.w == 0.0
    }

    /// The imaginary part `(x, y, z)`.
    #[inline]
    pub fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn squared_norm(&self) -> f64 {
        self.dot(self)
    }

    /// Four-component length, safe for components whose squares would overflow.
    #[inline]
    pub fn norm(&self) -> f64 {
        math::hypot(math::hypot(self.x, self.y), math::hypot(self.z, self.w))
    }

    /// Divides every component by the four-component norm.
    ///
    /// The zero quaternion has no direction and normalizes to itself.
    ///
    /// ```
    /// use rotation_core::Quaternion;
    ///
    /// let q = Quaternion::new(0.0, 0.0, 3.0, 4.0).normalize();
    /// assert_eq!(q, Quaternion::new(0.0, 0.0, 0.6, 0.8));
    /// assert_eq!(Quaternion::zero().normalize(), Quaternion::zero());
    /// ```
    pub fn normalize(&self) -> Self {
        *self / self.norm()
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse, `conjugate / |q|²`. The zero quaternion maps to zero.
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.squared_norm()
    }

    /// Rotates `v` by the rotation this quaternion encodes.
    ///
    /// The quaternion is normalized first, so any non-zero multiple of a unit
    /// quaternion rotates identically. The zero quaternion leaves `v` unchanged.
    pub fn rotate_vector(&self, v: Vector3) -> Vector3 {
        let q = self.normalize();
        if q.is_zero() {
            return v;
        }
        let p = Self::new(v.x, v.y, v.z, 0.0);
        (q * p * q.conjugate()).vector()
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Self {
        Self::from_array(arr)
    }
}

/// Hamilton product. `a * b` applies `b` first, then `a`.
impl std::ops::Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.x * b.w + a.y * b.z - a.z * b.y + a.w * b.x,
            -a.x * b.z + a.y * b.w + a.z * b.x + a.w * b.y,
            a.x * b.y - a.y * b.x + a.z * b.w + a.w * b.z,
            -a.x * b.x - a.y * b.y - a.z * b.z + a.w * b.w,
        )
    }
}

impl std::ops::MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl std::ops::Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::Mul<Quaternion> for f64 {
    type Output = Quaternion;

    fn mul(self, q: Quaternion) -> Quaternion {
        q * self
    }
}

/// Division by zero yields the zero quaternion instead of infinities.
impl std::ops::Div<f64> for Quaternion {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        if scalar == 0.0 {
            Self::zero()
        } else {
            Self::new(
                self.x / scalar,
                self.y / scalar,
                self.z / scalar,
                self.w / scalar,
            )
        }
    }
}

impl std::ops::Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl std::ops::Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl std::ops::Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion(x={:.9}, y={:.9}, z={:.9}, w={:.9})",
            self.x, self.y, self.z, self.w
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_ulp_lt;
    use crate::test_helpers::assert_quaternion_near;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TOL: f64 = 1e-7;

    fn sample() -> Quaternion {
        Quaternion::new(0.0, 1.0, -3.0, 2.0)
    }

    #[test]
    fn test_factories() {
        assert_eq!(Quaternion::zero().to_array(), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(Quaternion::identity().to_array(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Quaternion::i().to_array(), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(Quaternion::j().to_array(), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(Quaternion::k().to_array(), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(Quaternion::default(), Quaternion::identity());
    }

    #[test]
    fn test_norm() {
        assert!((sample().norm() - 3.741657).abs() < 1e-6);
        assert_eq!(sample().squared_norm(), 14.0);
    }

    #[test]
    fn test_normalize() {
        let q = sample().normalize();
        assert_quaternion_near(&q, [0.0, 0.2672612, -0.8017837, 0.5345225], TOL);
        assert_ulp_lt!(q.norm(), 1.0, 4);
    }

    #[test]
    fn test_normalize_huge_components() {
        let q = Quaternion::new(1e200, 0.0, 0.0, -1e200);
        assert!(q.norm().is_finite());
        let unit = q.normalize();
        assert_ulp_lt!(unit.x, FRAC_1_SQRT_2, 4);
        assert_ulp_lt!(unit.w, -FRAC_1_SQRT_2, 4);
        assert_eq!(unit.y, 0.0);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Quaternion::zero().normalize(), Quaternion::zero());
    }

    #[test]
    fn test_conjugate() {
        assert_eq!(sample().conjugate(), Quaternion::new(-0.0, -1.0, 3.0, 2.0));
    }

    #[test]
    fn test_inverse() {
        let inv = sample().inverse();
        assert_quaternion_near(&inv, [0.0, -0.0714286, 0.2142857, 0.1428571], TOL);
        assert_quaternion_near(&(sample() * inv), [0.0, 0.0, 0.0, 1.0], 1e-14);
        assert_eq!(Quaternion::zero().inverse(), Quaternion::zero());
    }

    #[test]
    fn test_hamilton_product() {
        let product = sample() * Quaternion::new(1.0, 3.0, -5.0, 1.0);
        assert_eq!(product, Quaternion::new(6.0, 4.0, -14.0, -16.0));
    }

    #[test]
    fn test_basis_products() {
        let (i, j, k) = (Quaternion::i(), Quaternion::j(), Quaternion::k());
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(i * i, -Quaternion::identity());
        assert_eq!(j * i, -k);

        let mut q = i;
        q *= j;
        assert_eq!(q, k);
    }

    #[test]
    fn test_scalar_ops() {
        let q = sample();
        assert_eq!(q * 2.0, Quaternion::new(0.0, 2.0, -6.0, 4.0));
        assert_eq!(2.0 * q, q * 2.0);
        assert_eq!(q / 2.0, Quaternion::new(0.0, 0.5, -1.5, 1.0));
        assert_eq!(q / 0.0, Quaternion::zero());
    }

    #[test]
    fn test_add_sub_neg() {
        let a = sample();
        let b = Quaternion::new(1.0, 3.0, -5.0, 1.0);
        assert_eq!(a + b, Quaternion::new(1.0, 4.0, -8.0, 3.0));
        assert_eq!(a - b, Quaternion::new(-1.0, -2.0, 2.0, 1.0));
        assert_eq!(-a, Quaternion::new(-0.0, -1.0, 3.0, -2.0));
    }

    #[test]
    fn test_rotate_vector() {
        let v = sample().rotate_vector(Vector3::new(1.0, 2.5, -0.5));
        assert!((v.x - 11.0 / 7.0).abs() < 1e-14);
        assert!((v.y + 19.0 / 14.0).abs() < 1e-14);
        assert!((v.z + 25.0 / 14.0).abs() < 1e-14);
    }

    #[test]
    fn test_rotate_vector_zero_quaternion_is_noop() {
        let v = Vector3::new(1.0, -2.0, 0.5);
        assert_eq!(Quaternion::zero().rotate_vector(v), v);
    }

    #[test]
    fn test_display() {
        let s = format!("{}", Quaternion::identity());
        assert_eq!(
            s,
            "Quaternion(x=0.000000000, y=0.000000000, z=0.000000000, w=1.000000000)"
        );
    }
}
