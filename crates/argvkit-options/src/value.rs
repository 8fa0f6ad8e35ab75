//! Value kinds an options map can hold

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A single scalar option value.
///
/// Integers are tried before floats when deserializing, so `3` stays an
/// integer and `0.5` becomes a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view of the scalar. Strings are never coerced.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            Self::Str(_) => None,
        }
    }

    /// Human-readable kind, used in `TypeMismatch` messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "an integer",
            Self::Float(_) => "a number",
            Self::Str(_) => "a string",
        }
    }
}

/// Stringification used for every value placed into an argument vector.
///
/// Floats with no fractional part print without a trailing `.0`
/// (`2.0` becomes `"2"`).
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for Scalar {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u8> for Scalar {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// One entry of an options map.
///
/// The variant set is closed: a boolean flag indicator, a scalar, an ordered
/// list of scalars, or a string-keyed map of scalars. Map entries live in a
/// `HashMap` and carry no order; consumers that emit them must sort first
/// (see [`crate::sorted_entries`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Scalar(Scalar),
    List(Vec<Scalar>),
    Map(HashMap<String, Scalar>),
}

impl OptionValue {
    /// `false` only for `Bool(false)`; every other present value is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }

    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "a boolean",
            Self::Scalar(s) => s.kind_name(),
            Self::List(_) => "a list",
            Self::Map(_) => "a map",
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Scalar> for OptionValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

macro_rules! scalar_option_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

scalar_option_value!(&str, String, &String, i64, i32, u32, u16, u8, f64);

impl<T: Into<Scalar>> From<Vec<T>> for OptionValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Scalar>> From<HashMap<K, V>> for OptionValue {
    fn from(map: HashMap<K, V>) -> Self {
        Self::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Scalar>> From<BTreeMap<K, V>> for OptionValue {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
