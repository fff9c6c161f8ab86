//! Value kinds and the tagged value type shared by every attribute.
//!
//! Each attribute carries one fixed [`Kind`]. Values cross the
//! [`crate::Attributer`] contract as [`Value`], a closed sum type whose tag
//! always agrees with the payload. Typed code works with the payload types
//! directly through the [`AttrValue`] trait.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic category of the values an attribute produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Signed integers, carried as `i64`.
    Int,
    /// Floating-point numbers, carried as `f64`.
    Float,
    /// Unsigned integers, carried as `u64`.
    Uint,
}

impl Kind {
    /// Returns the lowercase name of the kind.
    ///
    /// # Example
    ///
    /// ```
    /// use attributer::Kind;
    ///
    /// assert_eq!(Kind::Uint.as_str(), "uint");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Uint => "uint",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated value tagged with its kind.
///
/// Serializes as the bare number so record builders can emit JSON maps
/// keyed by column name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A signed integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// An unsigned integer value.
    Uint(u64),
}

impl Value {
    /// Returns the kind tag of this value.
    ///
    /// # Example
    ///
    /// ```
    /// use attributer::{Kind, Value};
    ///
    /// assert_eq!(Value::Float(42.0).kind(), Kind::Float);
    /// ```
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::Uint(_) => Kind::Uint,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Uint(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

pub(crate) mod sealed {
    /// Closes [`super::AttrValue`] to the payload types defined here.
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for u64 {}
}

/// Payload types an attribute can carry.
///
/// Each implementation maps to exactly one [`Kind`], which is what lets the
/// attribute variants enforce the kind of their current value statically.
/// The set is closed: `i64`, `f64` and `u64` are the only payload types, so
/// `KIND`, the [`Value`] conversion and [`AttrValue::from_value`] always agree.
///
/// ```compile_fail
/// use attributer::{AttrValue, Kind, Value};
///
/// #[derive(Debug, Clone, Copy, Default)]
/// struct Cents(u64);
///
/// impl From<Cents> for Value {
///     fn from(cents: Cents) -> Self {
///         Value::Uint(cents.0)
///     }
/// }
///
/// impl AttrValue for Cents {
///     const KIND: Kind = Kind::Uint;
///
///     fn from_value(value: Value) -> Option<Self> {
///         u64::from_value(value).map(Cents)
///     }
/// }
/// ```
pub trait AttrValue: sealed::Sealed + Copy + Default + fmt::Debug + Into<Value> + 'static {
    /// Kind tag of this payload type.
    const KIND: Kind;

    /// Extracts a payload from a tagged value, or `None` when the tag differs.
    fn from_value(value: Value) -> Option<Self>;
}

impl AttrValue for i64 {
    const KIND: Kind = Kind::Int;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Int(inner) => Some(inner),
            Value::Float(_) | Value::Uint(_) => None,
        }
    }
}

impl AttrValue for f64 {
    const KIND: Kind = Kind::Float;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(inner) => Some(inner),
            Value::Int(_) | Value::Uint(_) => None,
        }
    }
}

impl AttrValue for u64 {
    const KIND: Kind = Kind::Uint;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Uint(inner) => Some(inner),
            Value::Int(_) | Value::Float(_) => None,
        }
    }
}
