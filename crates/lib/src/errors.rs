//! Error types for map operations.
//!
//! The error surface is deliberately small: absent keys and paths are
//! ordinary negative results everywhere, never errors, so callers can probe
//! speculative paths without guarding each call. What remains is rejecting
//! malformed construction input, the one length-validated path argument,
//! and typed extraction.

use thiserror::Error;

/// Structured error type for [`PathMap`](crate::PathMap) operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    /// Construction was handed a value without key/value semantics.
    ///
    /// Raised only by [`PathMap::of`](crate::PathMap::of); there is no other
    /// construction-time failure.
    #[error("invalid argument: expected a map value, found {actual}")]
    InvalidArgument { actual: &'static str },

    /// A write was addressed with a path that normalizes to zero segments.
    ///
    /// Raised only by [`PathMap::assoc_path`](crate::PathMap::assoc_path),
    /// which has no sensible interpretation for an empty path.
    #[error("empty path: a value needs at least one path segment")]
    EmptyPath,

    /// Typed extraction found a value of a different variant.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl MapError {
    /// Check if this error comes from construction validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MapError::InvalidArgument { .. })
    }

    /// Check if this error comes from an empty path argument.
    pub fn is_empty_path(&self) -> bool {
        matches!(self, MapError::EmptyPath)
    }

    /// Check if this error comes from typed extraction.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, MapError::TypeMismatch { .. })
    }
}

// Conversion from MapError to the crate-level Error type
impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
