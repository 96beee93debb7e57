//! The persistent path-addressed map.
//!
//! [`PathMap`] is an insertion-ordered mapping from string keys to
//! [`Value`]s, where a value may itself be another map. Nothing mutates in
//! place: every write-style operation takes `&self` and returns a new map
//! that differs from the original only along the written path, so any number
//! of older snapshots stay valid and independent.
//!
//! # Keys and paths
//!
//! Operations come in two families. Key-level operations ([`assoc`],
//! [`dissoc`], [`omit`], [`modify`], [`contains_key`]) treat their key as an
//! opaque string. Path-level operations ([`get`], [`contains_path`],
//! [`assoc_path`], [`dissoc_path`], [`modify_path`], ...) accept anything
//! path-shaped - a dotted string, a [`PathBuf`](crate::path::PathBuf), or
//! the [`path!`](crate::path) macro output - and traverse one nested level
//! per segment. The two namespaces do not mix: a key containing a dot is
//! storable through `assoc` but unreachable through path traversal, which
//! always splits on `.`.
//!
//! [`assoc`]: PathMap::assoc
//! [`dissoc`]: PathMap::dissoc
//! [`omit`]: PathMap::omit
//! [`modify`]: PathMap::modify
//! [`contains_key`]: PathMap::contains_key
//! [`get`]: PathMap::get
//! [`contains_path`]: PathMap::contains_path
//! [`assoc_path`]: PathMap::assoc_path
//! [`dissoc_path`]: PathMap::dissoc_path
//! [`modify_path`]: PathMap::modify_path
//!
//! # Example
//!
//! ```
//! use pathmap::PathMap;
//!
//! let base = PathMap::new().assoc("name", "Ada");
//! let extended = base.assoc_path("contact.email", "ada@example.com")?;
//!
//! // The original snapshot is untouched
//! assert!(!base.contains_path("contact.email"));
//! assert_eq!(extended.get_as::<&str>("contact.email"), Some("ada@example.com"));
//! # Ok::<(), pathmap::MapError>(())
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::errors::MapError;
use crate::path::Path;
use crate::value::Value;

/// An immutable, insertion-ordered map addressable by nested key paths.
///
/// A `PathMap` never changes after construction. The write-style operations
/// (`assoc`, `dissoc_path`, `modify`, ...) build and return a new map,
/// copying the entries along the written path and leaving every sibling
/// branch value-identical; the receiver is readable before, during, and
/// after. That makes snapshots free to keep and instances safe to share
/// across threads without synchronization.
///
/// Construction goes through [`PathMap::new`] for an empty map,
/// [`PathMap::of`] for raw [`Value`] data (the one fallible entry point),
/// or `FromIterator` for typed pairs.
///
/// Equality is structural and order-sensitive: two maps are equal when they
/// hold equal entries in the same iteration order.
///
/// # Examples
///
/// ```
/// use pathmap::{PathMap, Value};
///
/// let config: PathMap = [("host", Value::from("localhost")), ("port", Value::from(8080))]
///     .into_iter()
///     .collect();
///
/// let tuned = config.assoc_path("limits.max_connections", 64)?;
///
/// assert_eq!(tuned.get_as::<i64>("limits.max_connections"), Some(64));
/// assert_eq!(tuned.get_as::<i64>("port"), Some(8080));
/// assert!(!config.contains_key("limits"));
/// # Ok::<(), pathmap::MapError>(())
/// ```
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PathMap {
    entries: IndexMap<String, Value>,
}

impl PathMap {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Builds a map from raw value data.
    ///
    /// This is the only entry point that constructs a map from an untyped
    /// [`Value`] and the only operation that can fail at construction time.
    ///
    /// # Errors
    /// Returns [`MapError::InvalidArgument`] if the value is not a map -
    /// a scalar or null has no key/value semantics to adopt.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::{PathMap, Value};
    ///
    /// let map = PathMap::of(Value::Map(PathMap::new().assoc("a", 1))).unwrap();
    /// assert_eq!(map.get_as::<i64>("a"), Some(1));
    ///
    /// assert!(PathMap::of(Value::Int(42)).unwrap_err().is_invalid_argument());
    /// assert!(PathMap::of(()).is_err());
    /// ```
    pub fn of(initial: impl Into<Value>) -> Result<Self, MapError> {
        match initial.into() {
            Value::Map(map) => Ok(map),
            other => Err(MapError::InvalidArgument {
                actual: other.type_name(),
            }),
        }
    }

    /// Returns the number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the top-level keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns an iterator over the top-level values, in the same order as
    /// [`keys`](PathMap::keys).
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns an iterator over the top-level entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns true if `key` exists at the top level.
    ///
    /// This is a presence check, not a truthiness check: a key holding
    /// `Null`, `0`, `false`, or an empty string still counts as present.
    /// The key is taken literally and never split into a path; use
    /// [`contains_path`](PathMap::contains_path) for nested lookups.
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Returns true if every segment of `path` resolves to an existing key.
    ///
    /// Traversal walks one nested map per segment and fails as soon as a
    /// segment is missing. An intermediate value that is not a map yields
    /// `false`, never an error; a final segment holding `Null` counts as
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathmap::PathMap;
    /// let map = PathMap::new().assoc_path("user.profile.name", "Ada").unwrap();
    ///
    /// assert!(map.contains_path("user.profile"));
    /// assert!(map.contains_path("user.profile.name"));
    /// assert!(!map.contains_path("user.email"));
    /// // "name" holds text, so there is nothing underneath it
    /// assert!(!map.contains_path("user.profile.name.length"));
    /// ```
    pub fn contains_path(&self, path: impl AsRef<Path>) -> bool {
        self.traverse(path.as_ref()).is_some()
    }

    /// Returns the value at `path`, or `None` if there is no value.
    ///
    /// `None` covers every negative outcome with a single sentinel: a
    /// missing segment, an intermediate value that is not a map, and also a
    /// final value that is explicitly `Null`. Collapsing "absent" and
    /// "present but null" mirrors the nullish-coalescing reference behavior
    /// and is an accepted looseness of this API, not a bug; use
    /// [`contains_path`](PathMap::contains_path) when the distinction
    /// matters.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathmap::{PathMap, Value};
    /// let map = PathMap::new()
    ///     .assoc("a", 1)
    ///     .assoc("gone", Value::Null);
    ///
    /// assert_eq!(map.get("a"), Some(&Value::Int(1)));
    /// assert_eq!(map.get("missing"), None);
    /// assert_eq!(map.get("gone"), None); // null collapses into the sentinel
    /// assert!(map.contains_key("gone")); // ...but the key is present
    /// ```
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Value> {
        match self.traverse(path.as_ref()) {
            Some(Value::Null) | None => None,
            found => found,
        }
    }

    /// Returns the value at `path`, or `default` if there is no value.
    ///
    /// Inherits the sentinel of [`get`](PathMap::get): a present key holding
    /// `Null` is indistinguishable from an absent path here and also falls
    /// back to `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathmap::{PathMap, Value};
    /// let map = PathMap::new().assoc("retries", 3).assoc("limit", Value::Null);
    /// let fallback = Value::Int(10);
    ///
    /// assert_eq!(map.get_or("retries", &fallback), &Value::Int(3));
    /// assert_eq!(map.get_or("missing", &fallback), &fallback);
    /// assert_eq!(map.get_or("limit", &fallback), &fallback);
    /// ```
    pub fn get_or<'a>(&'a self, path: impl AsRef<Path>, default: &'a Value) -> &'a Value {
        self.get(path).unwrap_or(default)
    }

    /// Returns true if the value at `path` equals `expected`.
    ///
    /// Comparison is strict - no type coercion. The lookup sentinel compares
    /// equal to [`Value::Null`], so an absent path (or a stored null)
    /// satisfies `path_eq(path, Value::Null)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathmap::{PathMap, Value};
    /// let map = PathMap::new().assoc_path("user.age", 30).unwrap();
    ///
    /// assert!(map.path_eq("user.age", 30));
    /// assert!(!map.path_eq("user.age", "30"));
    /// assert!(map.path_eq("user.email", Value::Null));
    /// ```
    pub fn path_eq<T>(&self, path: impl AsRef<Path>, expected: T) -> bool
    where
        Value: PartialEq<T>,
    {
        *self.get(path).unwrap_or(&Value::Null) == expected
    }

    /// Returns the value at `path` converted to `T`, or `None` if the path
    /// has no value or the conversion fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathmap::PathMap;
    /// let map = PathMap::new().assoc("name", "Ada").assoc("age", 36);
    ///
    /// assert_eq!(map.get_as::<&str>("name"), Some("Ada"));
    /// assert_eq!(map.get_as::<i64>("age"), Some(36));
    /// assert_eq!(map.get_as::<i64>("name"), None); // wrong type
    /// assert_eq!(map.get_as::<i64>("missing"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = MapError>,
    {
        let value = self.get(path)?;
        T::try_from(value).ok()
    }

    /// Returns a new map with `key` bound to `value` at the top level.
    ///
    /// An existing key is overwritten in place, keeping its insertion
    /// position; a new key is appended at the end. All other entries carry
    /// over unchanged and the receiver is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathmap::PathMap;
    /// let one = PathMap::new().assoc("a", 1);
    /// let two = one.assoc("b", 2).assoc("a", 10);
    ///
    /// assert_eq!(one.get_as::<i64>("a"), Some(1));
    /// assert_eq!(two.get_as::<i64>("a"), Some(10));
    /// assert_eq!(two.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    /// ```
    pub fn assoc(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.into(), value.into());
        PathMap { entries }
    }

    /// Returns a new map with `key` removed from the top level.
    ///
    /// Removing an absent key produces a map equal to the original. The
    /// surviving entries keep their relative order.
    pub fn dissoc(&self, key: impl AsRef<str>) -> Self {
        let mut entries = self.entries.clone();
        entries.shift_remove(key.as_ref());
        PathMap { entries }
    }

    /// Returns a new map with every key in `keys` removed from the top
    /// level.
    ///
    /// Keys that are not present are silently ignored; retained entries
    /// keep their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathmap::PathMap;
    /// let map = PathMap::new().assoc("a", 1).assoc("b", 2).assoc("c", 3);
    /// let kept = map.omit(["b", "nope"]);
    ///
    /// assert_eq!(kept.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    /// ```
    pub fn omit<I>(&self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut entries = self.entries.clone();
        for key in keys {
            entries.shift_remove(key.as_ref());
        }
        PathMap { entries }
    }

    /// Returns a new map with the value at `path` set, creating missing
    /// intermediate maps along the way.
    ///
    /// Every intermediate segment that does not exist is vivified as an
    /// empty nested map before descending; an intermediate that exists but
    /// holds a non-map value is replaced by an empty nested map, as the
    /// reference behavior does. The final segment is written (insert or
    /// overwrite). Maps along the path are copied; sibling branches carry
    /// over value-identical.
    ///
    /// # Errors
    /// Returns [`MapError::EmptyPath`] if `path` normalizes to zero
    /// segments - the single length-validated argument in this API.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmap::{path, PathMap};
    ///
    /// let map = PathMap::new().assoc_path(path!("a", "b"), 1)?;
    /// assert_eq!(map.get_as::<i64>("a.b"), Some(1));
    ///
    /// assert!(PathMap::new().assoc_path("", 1).is_err());
    /// # Ok::<(), pathmap::MapError>(())
    /// ```
    pub fn assoc_path(&self, path: impl AsRef<Path>, value: impl Into<Value>) -> Result<Self, MapError> {
        let segments: Vec<&str> = path.as_ref().components().collect();
        if segments.is_empty() {
            return Err(MapError::EmptyPath);
        }
        Ok(self.assoc_segments(&segments, value.into()))
    }

    /// Returns a new map with the key at the end of `path` removed.
    ///
    /// Only the final key goes away; intermediate maps stay in place. If
    /// any segment is missing - or an intermediate value is not a map - the
    /// result is simply equal to the original, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathmap::PathMap;
    /// let map = PathMap::new().assoc_path("a.b.c", 1).unwrap();
    ///
    /// let removed = map.dissoc_path("a.b.c");
    /// assert!(!removed.contains_path("a.b.c"));
    /// assert!(removed.contains_path("a.b")); // intermediates survive
    ///
    /// // Missing paths are a quiet no-op
    /// assert_eq!(map.dissoc_path("a.x.c"), map);
    /// ```
    pub fn dissoc_path(&self, path: impl AsRef<Path>) -> Self {
        let segments: Vec<&str> = path.as_ref().components().collect();
        match self.dissoc_segments(&segments) {
            Some(updated) => updated,
            None => self.clone(),
        }
    }

    /// Returns a new map with the value of `key` replaced by `f(current)`.
    ///
    /// If `key` is absent at the top level the result is equal to the
    /// original and `f` is never called. As everywhere in this API, change
    /// is observable through value comparison only - an unchanged result is
    /// an equal snapshot, not a shared reference.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathmap::{PathMap, Value};
    /// let map = PathMap::new().assoc("count", 1);
    ///
    /// let bumped = map.modify("count", |v| match v {
    ///     Value::Int(n) => Value::Int(n + 1),
    ///     other => other.clone(),
    /// });
    /// assert_eq!(bumped.get_as::<i64>("count"), Some(2));
    ///
    /// let same = map.modify("missing", |_| Value::Int(99));
    /// assert_eq!(same, map);
    /// ```
    pub fn modify(&self, key: impl AsRef<str>, f: impl FnOnce(&Value) -> Value) -> Self {
        let key = key.as_ref();
        match self.entries.get(key) {
            Some(current) => {
                let mut entries = self.entries.clone();
                entries.insert(key.to_string(), f(current));
                PathMap { entries }
            }
            None => self.clone(),
        }
    }

    /// Returns a new map with the leaf value at `path` replaced by
    /// `f(current)`.
    ///
    /// Unlike [`assoc_path`](PathMap::assoc_path) this never vivifies: if
    /// any segment is absent, including the final one, the result is equal
    /// to the original and `f` is never called. Presence means key
    /// presence, so a leaf holding `Null` is transformed like any other
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathmap::{PathMap, Value};
    /// let map = PathMap::new().assoc_path("stats.hits", 41).unwrap();
    ///
    /// let bumped = map.modify_path("stats.hits", |v| match v {
    ///     Value::Int(n) => Value::Int(n + 1),
    ///     other => other.clone(),
    /// });
    /// assert_eq!(bumped.get_as::<i64>("stats.hits"), Some(42));
    ///
    /// // No vivification on missing paths
    /// let same = PathMap::new().modify_path("a.b", |_| Value::Int(1));
    /// assert!(same.is_empty());
    /// ```
    pub fn modify_path(&self, path: impl AsRef<Path>, f: impl FnOnce(&Value) -> Value) -> Self {
        let segments: Vec<&str> = path.as_ref().components().collect();
        match self.modify_segments(&segments, f) {
            Some(updated) => updated,
            None => self.clone(),
        }
    }

    /// Returns the raw underlying mapping.
    ///
    /// Escape hatch for bulk inspection. Unlike [`get`](PathMap::get), the
    /// raw view shows `Null` entries as they are stored.
    pub fn as_index_map(&self) -> &IndexMap<String, Value> {
        &self.entries
    }

    /// Consumes the map and returns the underlying mapping.
    pub fn into_index_map(self) -> IndexMap<String, Value> {
        self.entries
    }

    /// Walks `path` one nested map per segment, by key presence.
    ///
    /// This is the raw traversal shared by the path operations: no sentinel
    /// collapsing, so a stored `Null` leaf comes back as `Some`.
    fn traverse(&self, path: &Path) -> Option<&Value> {
        let mut segments = path.components();
        let mut current = self.entries.get(segments.next()?)?;

        for segment in segments {
            match current {
                Value::Map(map) => current = map.entries.get(segment)?,
                _ => return None,
            }
        }

        Some(current)
    }

    /// Leaf-upward rebuild for `assoc_path`; `segments` is non-empty.
    fn assoc_segments(&self, segments: &[&str], value: Value) -> Self {
        let Some((first, rest)) = segments.split_first() else {
            return self.clone();
        };

        if rest.is_empty() {
            return self.assoc(*first, value);
        }

        let rebuilt = match self.entries.get(*first) {
            Some(Value::Map(child)) => child.assoc_segments(rest, value),
            Some(other) => {
                tracing::debug!(
                    segment = *first,
                    replaced = other.type_name(),
                    "replacing non-map intermediate value during path write"
                );
                PathMap::new().assoc_segments(rest, value)
            }
            None => PathMap::new().assoc_segments(rest, value),
        };
        self.assoc(*first, rebuilt)
    }

    /// Leaf-upward rebuild for `dissoc_path`; `None` means the path does
    /// not fully exist and the caller should fall back to a plain copy.
    fn dissoc_segments(&self, segments: &[&str]) -> Option<Self> {
        let (first, rest) = segments.split_first()?;

        if rest.is_empty() {
            if !self.entries.contains_key(*first) {
                return None;
            }
            return Some(self.dissoc(*first));
        }

        let child = match self.entries.get(*first)? {
            Value::Map(map) => map,
            _ => return None,
        };
        let rebuilt = child.dissoc_segments(rest)?;
        Some(self.assoc(*first, rebuilt))
    }

    /// Leaf-upward rebuild for `modify_path`; `None` means any segment was
    /// absent and the transform never ran.
    fn modify_segments(&self, segments: &[&str], f: impl FnOnce(&Value) -> Value) -> Option<Self> {
        let (first, rest) = segments.split_first()?;

        if rest.is_empty() {
            let current = self.entries.get(*first)?;
            return Some(self.assoc(*first, f(current)));
        }

        let child = match self.entries.get(*first)? {
            Value::Map(map) => map,
            _ => return None,
        };
        let rebuilt = child.modify_segments(rest, f)?;
        Some(self.assoc(*first, rebuilt))
    }
}

/// Equality is order-sensitive: same entries, same iteration order.
impl PartialEq for PathMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(other.entries.iter())
                .all(|(left, right)| left == right)
    }
}

impl Eq for PathMap {}

impl fmt::Display for PathMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K, V> FromIterator<(K, V)> for PathMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        PathMap { entries }
    }
}
