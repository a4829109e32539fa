//! Descriptor validation errors.

use thiserror::Error;

use crate::MAX_POSITIONS;

/// Errors that can occur while validating a descriptor string.
///
/// Only input outside the descriptor alphabet is rejected here; every
/// in-alphabet descriptor builds successfully, however malformed the
/// hierarchy it describes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// Character outside the '-', 'a'..'z', 'A'..'Z' alphabet.
    #[error("invalid descriptor character '{ch}' at position {position}")]
    InvalidChar { ch: char, position: usize },

    /// More positions than there are assignable names.
    #[error("descriptor has {len} positions, at most {max} are supported", max = MAX_POSITIONS)]
    TooLong { len: usize },
}

/// Result type for descriptor validation.
pub type DescriptorResult<T> = Result<T, DescriptorError>;
