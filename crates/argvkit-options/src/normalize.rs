//! Normalization helpers shared by validators and builders

use argvkit_error::{ArgvError, Result};
use std::collections::HashMap;

use crate::value::{OptionValue, Scalar};

/// Borrow a scalar-or-list value as an ordered list of scalars.
///
/// Fails with `TypeMismatch` for booleans and maps, and with
/// `InvalidArgument` for an empty list.
pub fn as_scalars<'a>(value: &'a OptionValue, label: &str) -> Result<Vec<&'a Scalar>> {
    match value {
        OptionValue::Scalar(s) => Ok(vec![s]),
        OptionValue::List(items) if items.is_empty() => {
            Err(ArgvError::invalid(label, "must not be an empty list"))
        }
        OptionValue::List(items) => Ok(items.iter().collect()),
        other => Err(ArgvError::mismatch(
            label,
            "a scalar or a list",
            other.kind_name(),
        )),
    }
}

/// Normalize a scalar-or-list value into an ordered list of strings.
///
/// Every element must stringify to a non-empty string.
pub fn to_list(value: &OptionValue, label: &str) -> Result<Vec<String>> {
    as_scalars(value, label)?
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let text = item.to_string();
            if text.is_empty() {
                Err(ArgvError::invalid(
                    format!("{label}[{i}]"),
                    "must be a non-empty string",
                ))
            } else {
                Ok(text)
            }
        })
        .collect()
}

/// Join a scalar-or-list value into a comma-separated string (`-o a,b,c`).
pub fn csv_join(value: &OptionValue, label: &str) -> Result<String> {
    Ok(to_list(value, label)?.join(","))
}

/// Map entries ordered by key.
///
/// `HashMap` iteration order is unspecified and varies between runs; argv
/// built from a map must always go through this sort.
#[must_use]
pub fn sorted_entries(map: &HashMap<String, Scalar>) -> Vec<(&str, &Scalar)> {
    let mut entries: Vec<(&str, &Scalar)> = map.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}
