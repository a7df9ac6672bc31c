//! Euler angles under the twelve axis orders.
//!
//! An Euler triple is meaningless without its axis order, so the order is part of
//! the type: [`EulerAngles<Xyz>`](EulerAngles) and [`EulerAngles<Zxz>`](EulerAngles)
//! cannot be mixed up, and converting between them is an explicit
//! [`to_sequence`](EulerAngles::to_sequence) call.
//!
//! | Family | Orders | Middle angle |
//! |--------|--------|--------------|
//! | Tait-Bryan | `xyz xzy yxz yzx zxy zyx` | `asin`, range [-π/2, π/2] |
//! | Proper Euler | `xyx xzx yxy yzy zxz zyz` | `acos`, range [0, π] |
//!
//! Code that only learns the order at run time works with [`EulerSequence`]
//! directly through [`EulerSequence::compose`] and [`EulerSequence::decompose`]:
//!
//! ```
//! use rotation_core::EulerSequence;
//!
//! let seq: EulerSequence = "zyz".parse().unwrap();
//! let m = seq.compose(0.5, 0.25, -0.75);
//! let [x, y, z] = seq.decompose(&m);
//! let back = seq.compose(x, y, z);
//! assert!(m.max_difference(&back) < 1e-14);
//! ```

mod angles;
mod compose;
mod decompose;
mod sequence;

pub use angles::EulerAngles;
pub use sequence::{
    Axis, EulerSequence, Sequence, Xyx, Xyz, Xzx, Xzy, Yxy, Yxz, Yzx, Yzy, Zxy, Zxz, Zyx, Zyz,
};
