//! 3×3 rotation matrices.
//!
//! [`RotationMatrix`] is the hub representation of the crate: every Euler
//! angle conversion is routed through it, and it converts to and from
//! [`Quaternion`](crate::Quaternion) in closed form.
//!
//! # Storage Layout
//!
//! Elements are stored row-major as `[[f64; 3]; 3]`. Element `(i, j)` is row `i`,
//! column `j`, and the matrix multiplies column vectors on the right:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```
//!
//! # Rotation Convention
//!
//! Elementary rotations are *active*: they rotate the vector, not the frame.
//! A positive angle turns counterclockwise when looking from the positive axis
//! toward the origin, so a quarter turn about Z takes `[1, 0, 0]` to `[0, 1, 0]`.
//!
//! ```
//! use rotation_core::{RotationMatrix, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let rz = RotationMatrix::about_z(FRAC_PI_2);
//! let v = rz * Vector3::x_axis();
//! assert!(v.x.abs() < 1e-15);
//! assert!((v.y - 1.0).abs() < 1e-15);
//! ```
//!
//! # Degenerate Matrices
//!
//! Nothing here validates orthonormality. [`zero`](RotationMatrix::zero) and
//! [`ones`](RotationMatrix::ones) are legal values and convert to well-defined
//! (if geometrically meaningless) quaternions and Euler angles. Callers that need a
//! proper rotation check with [`is_rotation_matrix`](RotationMatrix::is_rotation_matrix).

use super::Vector3;
use crate::math;
use std::fmt;

/// A 3×3 matrix intended to hold a rotation.
///
/// ```
/// use rotation_core::RotationMatrix;
///
/// let m = RotationMatrix::from_array([
///     [0.0, -1.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 0.0, 1.0],
/// ]);
/// assert!(m.is_rotation_matrix(1e-15));
/// assert_eq!(m.transpose() * m, RotationMatrix::identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix {
    pub fn zero() -> Self {
        Self::from_array([[0.0; 3]; 3])
    }

    pub fn ones() -> Self {
        Self::from_array([[1.0; 3]; 3])
    }

    pub fn identity() -> Self {
        Self::from_array([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Creates a matrix from row-major elements without validating them.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Active rotation by `angle` radians about the X axis.
    ///
    /// ```text
    /// | 1  0  0 |
    /// | 0  c -s |
    /// | 0  s  c |
    /// ```
    pub fn about_x(angle: f64) -> Self {
        let (s, c) = math::sincos(angle);
        Self::from_array([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Active rotation by `angle` radians about the Y axis.
    ///
    /// ```text
    /// |  c  0  s |
    /// |  0  1  0 |
    /// | -s  0  c |
    /// ```
    pub fn about_y(angle: f64) -> Self {
        let (s, c) = math::sincos(angle);
        Self::from_array([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    /// Active rotation by `angle` radians about the Z axis.
    ///
    /// ```text
    /// | c -s  0 |
    /// | s  c  0 |
    /// | 0  0  1 |
    /// ```
    pub fn about_z(angle: f64) -> Self {
        let (s, c) = math::sincos(angle);
        Self::from_array([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Panics if `row >= 3` or `col >= 3`. Also available as `matrix[(row, col)]`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> f64 {
        self.elements[0][0] + self.elements[1][1] + self.elements[2][2]
    }

    /// Matrix product `self * other`. The right-hand operand acts on a vector first.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    pub fn apply_to_vector(&self, vector: Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * vector.x + m[0][1] * vector.y + m[0][2] * vector.z,
            m[1][0] * vector.x + m[1][1] * vector.y + m[1][2] * vector.z,
            m[2][0] * vector.x + m[2][1] * vector.y + m[2][2] * vector.z,
        )
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// For a proper rotation the transpose is the inverse.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Checks `det = +1` and `M * Mᵀ = I`, each within `tolerance`.
    ///
    /// ```
    /// use rotation_core::RotationMatrix;
    ///
    /// assert!(RotationMatrix::about_y(0.3).is_rotation_matrix(1e-14));
    /// assert!(!RotationMatrix::ones().is_rotation_matrix(1e-14));
    ///
    /// // A reflection is orthogonal but not a rotation.
    /// let mirror = RotationMatrix::from_array([
    ///     [-1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(!mirror.is_rotation_matrix(1e-14));
    /// ```
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }

        let product = self.multiply(&self.transpose());
        product.max_difference(&Self::identity()) <= tolerance
    }

    /// Largest absolute element-wise difference between two matrices.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f64; 3]; 3]> for RotationMatrix {
    fn from(elements: [[f64; 3]; 3]) -> Self {
        Self::from_array(elements)
    }
}

impl std::ops::Mul for RotationMatrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix> for &RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, rhs: &RotationMatrix) -> RotationMatrix {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply_to_vector(vec)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply_to_vector(vec)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for RotationMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row][col]
    }
}

impl fmt::Display for RotationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_factories() {
        assert_eq!(RotationMatrix::zero().elements(), &[[0.0; 3]; 3]);
        assert_eq!(RotationMatrix::ones().elements(), &[[1.0; 3]; 3]);
        assert_eq!(RotationMatrix::identity().trace(), 3.0);
        assert_eq!(RotationMatrix::default(), RotationMatrix::identity());
    }

    #[test]
    fn test_get_set_and_index() {
        let mut m = RotationMatrix::identity();
        m.set(0, 1, 0.5);
        assert_eq!(m.get(0, 1), 0.5);
        m[(2, 0)] = -0.25;
        assert_eq!(m[(2, 0)], -0.25);
        assert_eq!(m.elements()[2][0], -0.25);
    }

    #[test]
    fn test_about_x_is_active() {
        let v = RotationMatrix::about_x(HALF_PI) * Vector3::y_axis();
        assert!(v.x.abs() < 1e-15);
        assert!(v.y.abs() < 1e-15);
        assert!((v.z - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_about_y_is_active() {
        let v = RotationMatrix::about_y(HALF_PI) * Vector3::z_axis();
        assert!((v.x - 1.0).abs() < 1e-15);
        assert!(v.y.abs() < 1e-15);
        assert!(v.z.abs() < 1e-15);
    }

    #[test]
    fn test_about_z_is_active() {
        let v = RotationMatrix::about_z(HALF_PI) * Vector3::x_axis();
        assert!(v.x.abs() < 1e-15);
        assert!((v.y - 1.0).abs() < 1e-15);
        assert!(v.z.abs() < 1e-15);
    }

    #[test]
    fn test_transpose_is_inverse() {
        let m = RotationMatrix::about_z(0.5) * RotationMatrix::about_x(0.3);
        let product = m * m.transpose();
        assert!(product.max_difference(&RotationMatrix::identity()) < 1e-15);
    }

    #[test]
    fn test_determinant() {
        assert_eq!(RotationMatrix::identity().determinant(), 1.0);
        assert_eq!(RotationMatrix::ones().determinant(), 0.0);
        let m = RotationMatrix::about_y(1.1) * RotationMatrix::about_z(-0.4);
        assert!((m.determinant() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_is_rotation_matrix_not_orthogonal() {
        let m = RotationMatrix::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!m.is_rotation_matrix(1e-15));
        assert!(!RotationMatrix::zero().is_rotation_matrix(1e-15));
    }

    #[test]
    fn test_mul_by_value_and_reference_agree() {
        let a = RotationMatrix::about_x(0.1);
        let b = RotationMatrix::about_y(0.2);
        assert_eq!(a * b, &a * &b);
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a * v, &a * v);
    }

    #[test]
    fn test_max_difference() {
        let a = RotationMatrix::identity();
        let b = RotationMatrix::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!((a.max_difference(&b) - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_display() {
        let s = format!("{}", RotationMatrix::identity());
        assert!(s.starts_with("RotationMatrix:\n"));
        assert!(s.contains("[ 1.000000000  0.000000000  0.000000000]"));
    }
}
