//! The options map a builder reads from

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::value::OptionValue;

/// Caller-supplied options for building one command.
///
/// Builders only ever borrow an `Options` immutably. Wrappers that need to
/// inject derived defaults call [`Options::with_defaults`], which returns a
/// fresh copy and leaves the caller's value untouched.
///
/// # Example
///
/// ```rust
/// use argvkit_options::Options;
///
/// let opts = Options::new()
///     .set("recursive", true)
///     .set("type", vec!["f", "l"])
///     .set_opt("max_depth", None::<i64>);
///
/// assert!(opts.is_truthy("recursive"));
/// assert!(opts.get("max_depth").is_none());
/// ```
///
/// Deserializing treats explicit `null` entries as absent keys, so a JSON
/// document like `{"verbose": null}` yields an empty map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Options {
    values: BTreeMap<String, OptionValue>,
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous entry.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` only when `value` is `Some`.
    #[must_use]
    pub fn set_opt<V: Into<OptionValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    /// Set `key` to `true` only when `on` is set; an off flag stays absent.
    #[must_use]
    pub fn set_flag(self, key: impl Into<String>, on: bool) -> Self {
        if on { self.set(key, true) } else { self }
    }

    /// Set `key` to a list only when `values` is non-empty.
    #[must_use]
    pub fn set_list<V>(self, key: impl Into<String>, values: &[V]) -> Self
    where
        V: Clone + Into<crate::Scalar>,
    {
        if values.is_empty() {
            self
        } else {
            self.set(key, values.to_vec())
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Present and not `false`.
    #[must_use]
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(OptionValue::is_truthy)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Copy of these options with every absent key filled from `defaults`.
    ///
    /// Keys already present keep their caller-supplied value.
    #[must_use]
    pub fn with_defaults<I, K, V>(&self, defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        let mut copy = self.clone();
        for (key, value) in defaults {
            copy.values.entry(key.into()).or_insert_with(|| value.into());
        }
        copy
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl<'de> Deserialize<'de> for Options {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Option<OptionValue>>::deserialize(deserializer)?;
        Ok(Self {
            values: raw
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v)))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;

    #[test]
    fn test_set_helpers_skip_unset_fields() {
        let opts = Options::new()
            .set_flag("on", true)
            .set_flag("off", false)
            .set_opt("some", Some("x"))
            .set_opt("none", None::<String>)
            .set_list("empty", &Vec::<String>::new())
            .set_list("full", &["a", "b"]);

        assert_eq!(opts.keys().collect::<Vec<_>>(), vec!["full", "on", "some"]);
        assert_eq!(
            opts.get("full"),
            Some(&OptionValue::List(vec![Scalar::from("a"), Scalar::from("b")]))
        );
    }

    #[test]
    fn test_with_defaults_leaves_original_untouched() {
        let original = Options::new().set("verbose", true).set("files", vec!["a"]);
        let snapshot = original.clone();

        let derived = original.with_defaults([("verbose", false), ("color", true)]);

        assert_eq!(original, snapshot);
        assert!(derived.is_truthy("verbose"));
        assert!(derived.is_truthy("color"));
        assert!(!original.contains("color"));
    }

    #[test]
    fn test_is_truthy() {
        let opts = Options::new().set("a", false).set("b", "x");
        assert!(!opts.is_truthy("a"));
        assert!(opts.is_truthy("b"));
        assert!(!opts.is_truthy("missing"));
    }

    #[test]
    fn test_deserialize_drops_nulls() {
        let opts: Options =
            serde_json::from_str(r#"{"verbose": null, "recursive": true}"#).unwrap();
        assert_eq!(opts.len(), 1);
        assert!(opts.is_truthy("recursive"));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let opts: Options = toml::from_str(
            r#"
            indent = 2
            type = ["f", "l"]

            [arg]
            z = "1"
            a = "2"
            "#,
        )
        .unwrap();

        assert_eq!(opts.get("indent"), Some(&OptionValue::Scalar(Scalar::Int(2))));
        assert!(matches!(opts.get("type"), Some(OptionValue::List(v)) if v.len() == 2));
        assert!(matches!(opts.get("arg"), Some(OptionValue::Map(m)) if m.len() == 2));
    }

    #[test]
    fn test_from_iterator() {
        let opts: Options = [("a", true), ("b", false)].into_iter().collect();
        assert_eq!(opts.len(), 2);
    }
}
