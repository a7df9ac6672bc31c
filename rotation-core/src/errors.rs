//! Error type for the few fallible entry points of the crate.
//!
//! Conversions between rotation representations never fail: degenerate inputs
//! map to documented default values instead. Errors only arise where a caller
//! hands the crate something it cannot interpret at all, such as an Euler
//! sequence name that does not exist or an element index outside the 3×3 grid.
//!
//! ```rust
//! use rotation_core::{EulerSequence, RotationError};
//!
//! let err = "xxy".parse::<EulerSequence>().unwrap_err();
//! assert!(matches!(err, RotationError::UnknownSequence { .. }));
//! assert_eq!(err.to_string(), "Unknown Euler sequence 'xxy'");
//! ```

use thiserror::Error;

/// Errors produced by parsing and checked access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    /// The name does not match any of the twelve Euler axis sequences.
    ///
    /// Accepted names are the lowercase axis letters (`"xyz"`, `"zxz"`, ...),
    /// compared case-insensitively.
    #[error("Unknown Euler sequence '{name}'")]
    UnknownSequence {
        /// The string that failed to parse
        name: String,
    },

    /// A component index was outside the valid range for the type.
    #[error("Index {index} out of range for {kind} (valid: 0..{len})")]
    IndexOutOfRange {
        /// Type being indexed, e.g. "Vector3"
        kind: &'static str,
        /// The rejected index
        index: usize,
        /// Number of addressable components
        len: usize,
    },
}

impl RotationError {
    pub fn unknown_sequence(name: impl Into<String>) -> Self {
        Self::UnknownSequence { name: name.into() }
    }

    pub fn index_out_of_range(kind: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { kind, index, len }
    }
}

pub type RotationResult<T> = Result<T, RotationError>;
