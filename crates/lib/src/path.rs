//! Path types for addressing nested map entries.
//!
//! A path names a location inside a [`PathMap`](crate::PathMap), possibly
//! several levels deep. It can be written as a single dot-separated string
//! (`"user.profile.name"`) or built from individual key segments; both forms
//! normalize to the same component sequence before any traversal. The
//! [`Path`]/[`PathBuf`] pair follows the borrowed/owned pattern of
//! `std::path`.
//!
//! # Core Types
//!
//! - [`Path`] - an unsized borrowed path (always behind a reference)
//! - [`PathBuf`] - an owned path that can be constructed and extended
//! - [`Component`] - one validated segment (may not contain a dot)
//!
//! # Usage
//!
//! ```rust
//! use pathmap::path::{Path, PathBuf};
//!
//! // From a string, normalized on construction
//! let path: PathBuf = "user..profile.name".parse().unwrap();
//! assert_eq!(path.as_str(), "user.profile.name");
//!
//! // Built segment by segment
//! let path = PathBuf::new().push("user").push("profile").push("name");
//! assert_eq!(path.len(), 3);
//!
//! // Borrowed view of a literal
//! let path = Path::new("user.profile");
//! assert_eq!(path.leaf(), Some("profile"));
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use thiserror::Error;

/// Error type for path component validation.
///
/// Whole-path construction is infallible through normalization; only
/// [`Component`] construction can reject its input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// Invalid component: components cannot contain the segment delimiter.
    #[error("invalid component '{component}': {reason}")]
    InvalidComponent { component: String, reason: String },
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// Normalizes a path string by dropping empty components.
///
/// - `""` stays empty (the zero-segment path)
/// - leading dots: `".user"` becomes `"user"`
/// - trailing dots: `"user."` becomes `"user"`
/// - consecutive dots: `"user..name"` becomes `"user.name"`
/// - only dots: `"..."` becomes empty
///
/// # Examples
///
/// ```rust
/// # use pathmap::path::normalize_path;
/// assert_eq!(normalize_path(""), "");
/// assert_eq!(normalize_path("..user..name."), "user.name");
/// assert_eq!(normalize_path("user.name"), "user.name");
/// ```
pub fn normalize_path(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// A validated single segment of a path.
///
/// Components are the pieces between dots and therefore may not contain a
/// dot themselves. The empty component is allowed; it disappears during
/// path normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    inner: String,
}

impl Component {
    /// Creates a component from a string.
    ///
    /// # Errors
    /// Fails only if the string contains a dot.
    pub fn new(s: impl Into<String>) -> Result<Self, PathError> {
        let s = s.into();

        if s.contains('.') {
            return Err(PathError::InvalidComponent {
                component: s,
                reason: "components cannot contain dots".to_string(),
            });
        }

        Ok(Component { inner: s })
    }

    /// Returns the component as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for Component {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::new(s)
    }
}

impl TryFrom<&str> for Component {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Component::new(s)
    }
}

impl TryFrom<String> for Component {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Component::new(s)
    }
}

/// An owned path into a nested map.
///
/// `PathBuf` keeps its segments in normalized dot-separated form: empty
/// components never survive construction, so `".user..name"` and
/// `"user.name"` build the same value.
///
/// # Examples
///
/// ```rust
/// # use pathmap::path::PathBuf;
/// let path = PathBuf::new().push("user").push("profile.name");
/// assert_eq!(path.as_str(), "user.profile.name");
///
/// let segments: Vec<&str> = path.components().collect();
/// assert_eq!(segments, vec!["user", "profile", "name"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed path into a nested map.
///
/// The counterpart to [`PathBuf`], as `&str` is to `String`. Any string
/// slice can be viewed as a `Path` through [`Path::new`] without allocating;
/// empty components in an unnormalized slice are skipped during component
/// iteration, so traversal behaves as if the path had been normalized.
///
/// This type is unsized and always used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Creates a path holding a single validated component.
    pub fn from_component(component: Component) -> Self {
        Self {
            inner: component.inner,
        }
    }

    /// Appends a path fragment, normalizing it first.
    ///
    /// Accepts plain segments as well as whole dotted fragments; empty
    /// fragments are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use pathmap::path::PathBuf;
    /// let path = PathBuf::new().push("user").push("").push("profile.name");
    /// assert_eq!(path.as_str(), "user.profile.name");
    /// ```
    pub fn push(mut self, fragment: impl AsRef<str>) -> Self {
        let normalized = normalize_path(fragment.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if self.inner.is_empty() {
            self.inner = normalized;
        } else {
            self.inner.push('.');
            self.inner.push_str(&normalized);
        }
        self
    }

    /// Appends a validated component.
    pub fn push_component(mut self, component: Component) -> Self {
        if component.inner.is_empty() {
            return self;
        }

        if self.inner.is_empty() {
            self.inner = component.inner;
        } else {
            self.inner.push('.');
            self.inner.push_str(&component.inner);
        }
        self
    }

    /// Joins this path with another path.
    pub fn join(self, other: impl AsRef<Path>) -> Self {
        self.push(other.as_ref().as_str())
    }

    /// Creates a `PathBuf` by normalizing the input string.
    pub fn normalize(path: &str) -> Self {
        PathBuf {
            inner: normalize_path(path),
        }
    }
}

impl Path {
    /// Wraps a string slice as a borrowed path, without allocation.
    ///
    /// No validation happens here, mirroring `std::path::Path::new`. A slice
    /// with empty components ("`.a..b`") traverses like its normalized form
    /// because component iteration filters them out, but `as_str`, equality
    /// and hashing observe the raw text.
    pub fn new<S: AsRef<str> + ?Sized>(s: &S) -> &Path {
        // SAFETY: Path is repr(transparent) over str.
        unsafe { &*(s.as_ref() as *const str as *const Path) }
    }

    /// Returns an iterator over the non-empty components.
    pub fn components(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of components.
    pub fn len(&self) -> usize {
        self.components().count()
    }

    /// Returns `true` if the path has no components.
    pub fn is_empty(&self) -> bool {
        self.components().next().is_none()
    }

    /// Returns the path with its last component removed, or `None` at the
    /// root.
    ///
    /// ```rust
    /// # use pathmap::path::Path;
    /// let path = Path::new("user.profile.name");
    /// assert_eq!(path.parent().map(|p| p.as_str()), Some("user.profile"));
    /// assert_eq!(Path::new("user").parent(), None);
    /// ```
    pub fn parent(&self) -> Option<&Path> {
        self.inner.rfind('.').map(|i| Path::new(&self.inner[..i]))
    }

    /// Returns the last component, or `None` if the path is empty.
    pub fn leaf(&self) -> Option<&str> {
        self.components().next_back()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` into an owned, normalized [`PathBuf`].
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::normalize(&self.inner)
    }
}

impl Default for PathBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::new(self.inner.as_str())
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.deref()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.deref()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl<S: AsRef<str>> FromIterator<S> for PathBuf {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        iter.into_iter()
            .fold(PathBuf::new(), |path, segment| path.push(segment))
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", self.inner)
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

/// Constructs a path from a literal or from individual segments.
///
/// - `path!()` - empty `PathBuf`
/// - `path!("user.profile.name")` - single literal, returns `&'static Path`
///   without allocating
/// - `path!("user", "profile", "name")` - segment sequence, returns `PathBuf`
/// - `path!(base, "profile")` - runtime values mix with literals, returns
///   `PathBuf`
///
/// The segment form is the "ordered sequence of keys" spelling of a path;
/// it normalizes exactly like the dotted-string form, so
/// `path!("a", "b", "c")` addresses the same entry as `"a.b.c"`.
///
/// # Examples
///
/// ```rust
/// use pathmap::{path, path::Path};
///
/// let literal = path!("user.profile.name");
/// let segments = path!("user", "profile", "name");
/// assert_eq!(literal, &*segments);
/// ```
#[macro_export]
macro_rules! path {
    // Empty path
    () => {
        $crate::path::PathBuf::new()
    };

    // Single string literal: borrow it in place
    ($single:literal) => {
        $crate::path::Path::new($single)
    };

    // Segment sequence, or a single runtime value
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let path = $crate::path::PathBuf::new().push($first);
        $(
            let path = path.push($rest);
        )*
        path
    }};
}
