//! Per-operation settings for [`crate::ArgBuilder`]

use argvkit_error::Result;
use argvkit_options::Scalar;
use argvkit_validation::{NumberRule, Rule, one_of};

/// How a flag and its value are laid out in argv.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueMode {
    /// `--flag value` as two tokens.
    #[default]
    Pair,
    /// `--flag=value` as one token.
    Equals,
}

impl ValueMode {
    pub(crate) fn render(self, literal: &str, value: String) -> Vec<String> {
        match self {
            Self::Pair => vec![literal.to_string(), value],
            Self::Equals => vec![format!("{literal}={value}")],
        }
    }
}

/// A validation step attached to a builder operation.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    Rule(Rule),
    Number(NumberRule),
    OneOf(&'static [&'static str]),
}

impl Check {
    pub fn run(&self, value: &Scalar, label: &str) -> Result<()> {
        match self {
            Self::Rule(rule) => rule(value, label),
            Self::Number(rule) => rule.check(value, label),
            Self::OneOf(allowed) => one_of(value, label, allowed),
        }
    }
}

/// Settings for `value` and `bool_or_value`.
#[derive(Debug, Clone, Default)]
pub struct ValueConfig {
    /// Label used in errors; defaults to the option key.
    pub label: Option<String>,
    pub validate: Option<Check>,
    pub mode: ValueMode,
}

impl ValueConfig {
    /// `--flag value`, no validation.
    #[must_use]
    pub fn pair() -> Self {
        Self::default()
    }

    /// `--flag=value`, no validation.
    #[must_use]
    pub fn equals() -> Self {
        Self {
            mode: ValueMode::Equals,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn check(mut self, check: Check) -> Self {
        self.validate = Some(check);
        self
    }
}

/// Settings for `repeatable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatConfig {
    pub validate: Option<Check>,
    pub mode: ValueMode,
}

impl RepeatConfig {
    #[must_use]
    pub fn check(check: Check) -> Self {
        Self {
            validate: Some(check),
            mode: ValueMode::Pair,
        }
    }

    #[must_use]
    pub fn equals(mut self) -> Self {
        self.mode = ValueMode::Equals;
        self
    }
}

/// Settings for `repeatable_map`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapConfig {
    pub key_validate: Option<Check>,
    pub value_validate: Option<Check>,
}

/// Settings for `count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountConfig {
    /// Repetitions emitted for a bare `true`.
    pub default_times: usize,
    /// Smallest accepted explicit count.
    pub min: i64,
    /// Largest accepted explicit count.
    pub max: usize,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            default_times: 1,
            min: 1,
            max: 16,
        }
    }
}
