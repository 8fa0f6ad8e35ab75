//! Typed field shapes used by per-tool option structs

use serde::{Deserialize, Serialize};

use crate::value::{OptionValue, Scalar};

/// A field that accepts either a single value or an ordered list of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Collapse into the canonical ordered list.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(v) => vec![v],
            Self::Many(vs) => vs,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(vs) => vs.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

impl<T: Into<Scalar>> From<OneOrMany<T>> for OptionValue {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(v) => Self::Scalar(v.into()),
            OneOrMany::Many(vs) => Self::List(vs.into_iter().map(Into::into).collect()),
        }
    }
}

/// A field that is either switched on bare or given a value.
///
/// Used for bool-or-value flags (`--checkpoint` / `--checkpoint=10`) and
/// for repetition counts (`-v` / `-vvv`). There is deliberately no "off"
/// variant: an unset field is `None` on the owning struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagOrValue<T> {
    Flag,
    Value(T),
}

// Serialized as `true` for the bare flag, or as the value itself.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FlagOrValueRepr<T> {
    Flag(bool),
    Value(T),
}

impl<T: Serialize> Serialize for FlagOrValue<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag => true.serialize(serializer),
            Self::Value(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FlagOrValue<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match FlagOrValueRepr::deserialize(deserializer)? {
            FlagOrValueRepr::Flag(true) => Ok(Self::Flag),
            FlagOrValueRepr::Flag(false) => Err(serde::de::Error::custom(
                "false is not accepted; omit the field instead",
            )),
            FlagOrValueRepr::Value(v) => Ok(Self::Value(v)),
        }
    }
}

impl<T: Into<Scalar>> From<FlagOrValue<T>> for OptionValue {
    fn from(value: FlagOrValue<T>) -> Self {
        match value {
            FlagOrValue::Flag => Self::Bool(true),
            FlagOrValue::Value(v) => Self::Scalar(v.into()),
        }
    }
}
