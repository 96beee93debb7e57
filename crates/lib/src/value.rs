//! Value types stored in a [`PathMap`].
//!
//! [`Value`] is the tagged variant behind every map entry: either a scalar
//! payload (null, boolean, integer, text) or another [`PathMap`]. Traversal
//! code pattern-matches on the variant to decide between descending and
//! stopping, so there is no runtime type inspection anywhere else.

use std::fmt;

use crate::errors::MapError;
use crate::map::PathMap;

/// A value held by one entry of a [`PathMap`].
///
/// # Value Types
///
/// ## Scalars (terminal)
/// - [`Value::Null`] - the null value
/// - [`Value::Bool`] - booleans
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Text`] - UTF-8 strings
///
/// ## Nested (traversable)
/// - [`Value::Map`] - another map, by value containment
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` against the common primitive types, in
/// both directions, so comparisons stay free of constructor noise:
///
/// ```
/// # use pathmap::Value;
/// let text = Value::Text("hello".to_string());
/// let number = Value::Int(42);
///
/// assert!(text == "hello");
/// assert!(42 == number);
///
/// // Mismatched types are unequal, never coerced
/// assert!(text != 42);
/// assert!(number != "42");
/// ```
///
/// Equality between two `Value`s is the derived structural comparison; two
/// nested maps are equal when their entries and entry order match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null value. Present-but-null entries count for key presence, but the
    /// path lookups collapse them into the absent sentinel; see
    /// [`PathMap::get`].
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Text string value
    Text(String),
    /// Nested map
    Map(PathMap),
}

impl Value {
    /// Returns true for the scalar variants (everything except [`Value::Map`]).
    pub fn is_scalar(&self) -> bool {
        !self.is_map()
    }

    /// Returns true if this value is a nested map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the variant name as a static string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Text(_) => "text",
            Value::Map(_) => "map",
        }
    }

    /// Attempts to view this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to view this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to view this value as a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to view this value as a nested map.
    pub fn as_map(&self) -> Option<&PathMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Map(map) => write!(f, "{map}"),
        }
    }
}

// From implementations for the common payload types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<PathMap> for Value {
    fn from(value: PathMap) -> Self {
        Value::Map(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

// TryFrom implementations for typed extraction, feeding PathMap::get_as
impl TryFrom<&Value> for String {
    type Error = MapError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(MapError::TypeMismatch {
                expected: "text",
                actual: value.type_name(),
            }),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = MapError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(MapError::TypeMismatch {
                expected: "text",
                actual: value.type_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = MapError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(MapError::TypeMismatch {
                expected: "int",
                actual: value.type_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = MapError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(MapError::TypeMismatch {
                expected: "bool",
                actual: value.type_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for PathMap {
    type Error = MapError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(map) => Ok(map.clone()),
            _ => Err(MapError::TypeMismatch {
                expected: "map",
                actual: value.type_name(),
            }),
        }
    }
}

// PartialEq against primitives, both directions
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Value::Int(n) => *n == *other as i64,
            _ => false,
        }
    }
}

impl PartialEq<u32> for Value {
    fn eq(&self, other: &u32) -> bool {
        match self {
            Value::Int(n) => *n == *other as i64,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(b) => b == other,
            _ => false,
        }
    }
}

impl PartialEq<Value> for str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for u32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
