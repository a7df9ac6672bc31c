//! Rotation representations for 3D geometry and conversions between them.
//!
//! `rotation-core` covers four encodings of the same rotation and converts any of
//! them into any other with `From`/`Into`. Conversions are total: degenerate
//! inputs such as the zero quaternion or a non-orthonormal matrix map to fixed,
//! documented results instead of errors.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`quaternion`] | [`Quaternion`] value type and quaternion algebra |
//! | [`matrix`] | 3×3 [`RotationMatrix`] and [`Vector3`] |
//! | [`axis_angle`] | [`AxisAngle`] rotation about a unit axis |
//! | [`euler`] | [`EulerAngles`] tagged by one of twelve axis orders |
//! | [`conversions`] | `From` impls connecting every pair of representations |
//! | [`math`] | libm wrappers, clamped inverse trigonometry |
//! | [`constants`] | π and angle unit conversions |
//! | [`errors`] | [`RotationError`] and [`RotationResult`] |
//!
//! # Example
//!
//! ```
//! use rotation_core::{AxisAngle, EulerAngles, Quaternion, RotationMatrix, Vector3, Zyx};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let aa = AxisAngle::new(Vector3::z_axis(), FRAC_PI_2);
//! let q = Quaternion::from(aa);
//! let m = RotationMatrix::from(q);
//! let e: EulerAngles<Zyx> = m.into();
//!
//! assert!((e.x - FRAC_PI_2).abs() < 1e-15);
//! assert!(e.y.abs() < 1e-15);
//! assert!(e.z.abs() < 1e-15);
//!
//! let v = m * Vector3::x_axis();
//! assert!((v.y - 1.0).abs() < 1e-15);
//! ```
//!
//! # Design Notes
//!
//! - **Matrix hub**: Euler angles only ever convert to and from [`RotationMatrix`];
//!   every other Euler conversion chains through it.
//!
//! - **Type-level axis order**: `EulerAngles<Xyz>` and `EulerAngles<Zxz>` are
//!   different types. [`EulerSequence`] is the runtime counterpart for orders only
//!   known at run time.
//!
//! - **Radians throughout.** [`constants::DEG_TO_RAD`] converts at the boundary.
//!
//! - **No logging setup**: degenerate branches emit `tracing` events at `debug`
//!   and `trace` level. Install a subscriber to see them.

pub mod axis_angle;
pub mod constants;
pub mod conversions;
pub mod errors;
pub mod euler;
pub mod math;
pub mod matrix;
pub mod quaternion;

pub use axis_angle::AxisAngle;
pub use errors::{RotationError, RotationResult};
pub use euler::{
    Axis, EulerAngles, EulerSequence, Sequence, Xyx, Xyz, Xzx, Xzy, Yxy, Yxz, Yzx, Yzy, Zxy, Zxz,
    Zyx, Zyz,
};
pub use matrix::{RotationMatrix, Vector3};
pub use quaternion::Quaternion;

pub mod test_helpers;
