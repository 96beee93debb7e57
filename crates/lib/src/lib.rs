//!
//! Pathmap: a persistent map addressed by nested key paths.
//! This library provides an insertion-ordered string-keyed map where values
//! nest arbitrarily deep and every write produces a new snapshot.
//!
//! ## Core Concepts
//!
//! The crate is built around a small set of types:
//!
//! * **Maps (`map::PathMap`)**: The container itself. All write-style operations
//!   take `&self` and return a fresh map, so existing snapshots are never
//!   invalidated and can be shared freely across threads.
//! * **Values (`value::Value`)**: The data stored under each key - null, booleans,
//!   integers, text, or another nested map.
//! * **Paths (`path::Path` / `path::PathBuf`)**: Addresses for nested entries,
//!   written as dot-separated strings (`"user.profile.name"`) or built segment
//!   by segment. The pair follows the borrowed/owned split of `std::path`, and
//!   the [`path!`] macro builds them inline.
//! * **Two addressing levels**: Key operations (`assoc`, `dissoc`, `modify`, ...)
//!   treat their argument as one literal key; path operations (`get`,
//!   `assoc_path`, `dissoc_path`, ...) split on `.` and walk one nested map per
//!   segment.
//!
//! ## Example
//!
//! ```
//! use pathmap::{path, PathMap, Value};
//!
//! let profile = PathMap::new()
//!     .assoc("name", "Ada")
//!     .assoc_path(path!("contact", "email"), "ada@example.com")?;
//!
//! assert_eq!(profile.get_as::<&str>("contact.email"), Some("ada@example.com"));
//! assert!(profile.path_eq("contact.phone", Value::Null));
//! # Ok::<(), pathmap::Error>(())
//! ```

pub mod errors;
pub mod map;
pub mod path;
pub mod value;

/// Re-export the main types for easier access.
pub use errors::MapError;
pub use map::PathMap;
pub use value::Value;

/// Result type used throughout the pathmap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the pathmap library.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Structured map construction and write errors from the errors module
    #[error(transparent)]
    Map(errors::MapError),

    /// Structured path component errors from the path module
    #[error(transparent)]
    Path(path::PathError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Map(_) => "map",
            Error::Path(_) => "path",
        }
    }

    /// Check if this error rejected a non-map construction argument.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_invalid_argument(),
            _ => false,
        }
    }

    /// Check if this error rejected a zero-segment path.
    pub fn is_empty_path(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_empty_path(),
            _ => false,
        }
    }

    /// Check if this error is a value type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is path-related.
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }
}
