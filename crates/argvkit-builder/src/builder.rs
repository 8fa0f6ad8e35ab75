use argvkit_error::{ArgvError, Result};
use argvkit_options::{OptionValue, Options, Scalar, as_scalars, csv_join, sorted_entries};
use argvkit_validation::{NumberRule, non_empty_str, non_empty_string, not_flag, not_flag_str};
use tracing::debug;

use crate::config::{Check, CountConfig, MapConfig, RepeatConfig, ValueConfig, ValueMode};

/// Marker separating options from operands.
pub const END_OF_OPTIONS: &str = "--";

/// Builds the argument vector of one command from an [`Options`] map.
///
/// The builder binds a caller-owned target vector (which may already hold
/// leading tokens) and a read-only view of the options. Operations are
/// chainable and fail fast. Tokens are staged internally and only reach the
/// target on [`finish`](Self::finish); once any operation has failed the
/// builder refuses to commit, so a failed build never leaves a partial argv
/// behind.
///
/// Every option-reading operation is a no-op when its key is absent.
///
/// # Example
///
/// ```rust
/// use argvkit_builder::ArgBuilder;
/// use argvkit_options::Options;
///
/// # fn main() -> argvkit_error::Result<()> {
/// let opts = Options::new().set("recursive", true).set("verbose", true);
/// let mut argv = vec!["cp".to_string()];
///
/// let mut b = ArgBuilder::new(&mut argv, &opts);
/// b.mutually_exclusive(&["force", "interactive"], "cp")?
///     .flag("recursive", "-r")?
///     .flag("force", "-f")?
///     .flag("verbose", "-v")?
///     .operands(&["a", "b", "dst"], "path")?;
/// b.finish()?;
///
/// assert_eq!(argv, ["cp", "-r", "-v", "--", "a", "b", "dst"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ArgBuilder<'a> {
    target: &'a mut Vec<String>,
    options: &'a Options,
    pending: Vec<String>,
    failure: Option<ArgvError>,
}

impl<'a> ArgBuilder<'a> {
    pub fn new(target: &'a mut Vec<String>, options: &'a Options) -> Self {
        Self {
            target,
            options,
            pending: Vec::new(),
            failure: None,
        }
    }

    #[must_use]
    pub fn options(&self) -> &'a Options {
        self.options
    }

    /// Tokens staged so far and not yet committed.
    #[must_use]
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    fn lookup(&self, key: &str) -> Option<&'a OptionValue> {
        self.options.get(key)
    }

    /// Run one operation atomically: either all of its tokens are staged or
    /// none are and the builder is poisoned with the error.
    fn apply<F>(&mut self, op: F) -> Result<&mut Self>
    where
        F: FnOnce(&Self) -> Result<Vec<String>>,
    {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        match op(self) {
            Ok(tokens) => {
                self.pending.extend(tokens);
                Ok(self)
            }
            Err(err) => {
                self.failure = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Append `literal` when `options[key]` is `true`.
    pub fn flag(&mut self, key: &str, literal: &str) -> Result<&mut Self> {
        self.apply(|b| match b.lookup(key) {
            None | Some(OptionValue::Bool(false)) => Ok(Vec::new()),
            Some(OptionValue::Bool(true)) => Ok(vec![literal.to_string()]),
            Some(other) => Err(ArgvError::mismatch(key, "a boolean", other.kind_name())),
        })
    }

    /// Append `literal` and the (validated) scalar value of `options[key]`.
    pub fn value(&mut self, key: &str, literal: &str, cfg: ValueConfig) -> Result<&mut Self> {
        self.apply(|b| {
            let Some(value) = b.lookup(key) else {
                return Ok(Vec::new());
            };
            let label = cfg.label.as_deref().unwrap_or(key);
            let scalar = expect_scalar(value, label)?;
            render_value(literal, scalar, label, cfg.validate.as_ref(), cfg.mode)
        })
    }

    /// `value` with the non-empty string rule.
    pub fn value_string(&mut self, key: &str, literal: &str) -> Result<&mut Self> {
        self.value(
            key,
            literal,
            ValueConfig::pair().check(Check::Rule(non_empty_string)),
        )
    }

    /// `value` with the flag-injection guard.
    pub fn value_token(&mut self, key: &str, literal: &str) -> Result<&mut Self> {
        self.value(key, literal, ValueConfig::pair().check(Check::Rule(not_flag)))
    }

    /// `value` with a numeric rule.
    pub fn value_number(&mut self, key: &str, literal: &str, rule: NumberRule) -> Result<&mut Self> {
        self.value(key, literal, ValueConfig::pair().check(Check::Number(rule)))
    }

    /// Append `literal` and a comma-joined scalar-or-list (`-o a,b,c`).
    pub fn value_csv(&mut self, key: &str, literal: &str, mode: ValueMode) -> Result<&mut Self> {
        self.apply(|b| {
            let Some(value) = b.lookup(key) else {
                return Ok(Vec::new());
            };
            Ok(mode.render(literal, csv_join(value, key)?))
        })
    }

    /// Append `literal, element` for every element of a scalar-or-list,
    /// in caller order.
    pub fn repeatable(&mut self, key: &str, literal: &str, cfg: RepeatConfig) -> Result<&mut Self> {
        self.apply(|b| {
            let Some(value) = b.lookup(key) else {
                return Ok(Vec::new());
            };
            let mut tokens = Vec::new();
            for (i, item) in as_scalars(value, key)?.into_iter().enumerate() {
                let label = format!("{key}[{i}]");
                if let Scalar::Str(text) = item {
                    non_empty_str(text, &label)?;
                }
                tokens.extend(render_value(literal, item, &label, cfg.validate.as_ref(), cfg.mode)?);
            }
            Ok(tokens)
        })
    }

    /// Append `literal, key, value` for every entry of a map, sorted by key.
    pub fn repeatable_map(&mut self, key: &str, literal: &str, cfg: MapConfig) -> Result<&mut Self> {
        self.apply(|b| {
            let map = match b.lookup(key) {
                None => return Ok(Vec::new()),
                Some(OptionValue::Map(map)) => map,
                Some(other) => return Err(ArgvError::mismatch(key, "a map", other.kind_name())),
            };
            let mut tokens = Vec::with_capacity(map.len() * 3);
            for (name, value) in sorted_entries(map) {
                non_empty_str(name, key)?;
                if let Some(check) = &cfg.key_validate {
                    check.run(&Scalar::from(name), key)?;
                }
                if let Some(check) = &cfg.value_validate {
                    check.run(value, &format!("{key}.{name}"))?;
                }
                tokens.push(literal.to_string());
                tokens.push(name.to_string());
                tokens.push(value.to_string());
            }
            Ok(tokens)
        })
    }

    /// `true` appends the bare `literal`; a scalar appends `literal` with the
    /// validated value. `false` is rejected as ambiguous.
    pub fn bool_or_value(&mut self, key: &str, literal: &str, cfg: ValueConfig) -> Result<&mut Self> {
        self.apply(|b| {
            let label = cfg.label.as_deref().unwrap_or(key);
            match b.lookup(key) {
                None => Ok(Vec::new()),
                Some(OptionValue::Bool(true)) => Ok(vec![literal.to_string()]),
                Some(OptionValue::Bool(false)) => Err(ArgvError::invalid(
                    label,
                    "false is ambiguous here; omit the option instead",
                )),
                Some(OptionValue::Scalar(scalar)) => {
                    render_value(literal, scalar, label, cfg.validate.as_ref(), cfg.mode)
                }
                Some(other) => Err(ArgvError::mismatch(
                    label,
                    "a boolean or a scalar",
                    other.kind_name(),
                )),
            }
        })
    }

    /// Repeat `literal` for cumulative flags such as `-vvv`.
    ///
    /// `true` repeats it `default_times`; an integer `n` in `min..=max`
    /// repeats it `n` times; `false` emits nothing.
    pub fn count(&mut self, key: &str, literal: &str, cfg: CountConfig) -> Result<&mut Self> {
        self.apply(|b| {
            let times = match b.lookup(key) {
                None | Some(OptionValue::Bool(false)) => 0,
                Some(OptionValue::Bool(true)) => cfg.default_times,
                Some(OptionValue::Scalar(scalar)) => repetitions(scalar, key, cfg.min, cfg.max)?,
                Some(other) => {
                    return Err(ArgvError::mismatch(
                        key,
                        "a boolean or an integer",
                        other.kind_name(),
                    ));
                }
            };
            Ok(vec![literal.to_string(); times])
        })
    }

    /// Fail with `ConflictingOptions` when more than one of `keys` is truthy.
    ///
    /// Call this before the group's flags so the check runs ahead of them.
    pub fn mutually_exclusive(&mut self, keys: &[&str], label: &str) -> Result<&mut Self> {
        self.apply(|b| {
            let set: Vec<String> = keys
                .iter()
                .filter(|key| b.options.is_truthy(key))
                .map(|key| (*key).to_string())
                .collect();
            if set.len() > 1 {
                return Err(ArgvError::ConflictingOptions {
                    label: label.to_string(),
                    keys: set,
                });
            }
            Ok(Vec::new())
        })
    }

    /// Append the caller's raw passthrough tokens from `options["extra"]`.
    pub fn extra(&mut self) -> Result<&mut Self> {
        self.extra_from("extra")
    }

    /// Append every element of the list at `options[key]` verbatim.
    ///
    /// Only the shape is checked; entries are trusted caller tokens.
    pub fn extra_from(&mut self, key: &str) -> Result<&mut Self> {
        self.apply(|b| match b.lookup(key) {
            None => Ok(Vec::new()),
            Some(OptionValue::List(items)) => Ok(items.iter().map(ToString::to_string).collect()),
            Some(other) => Err(ArgvError::mismatch(key, "a list", other.kind_name())),
        })
    }

    /// Append a wrapper-owned literal token.
    pub fn raw(&mut self, token: &str) -> Result<&mut Self> {
        self.apply(|_| Ok(vec![token.to_string()]))
    }

    /// Append a positional that must not look like a flag.
    pub fn positional(&mut self, value: &str, label: &str) -> Result<&mut Self> {
        self.apply(|_| {
            not_flag_str(value, label)?;
            Ok(vec![value.to_string()])
        })
    }

    /// Append `--` followed by every operand.
    ///
    /// Operands may start with `-`; the marker stops the tool from reading
    /// them as options. At least one operand is required.
    pub fn operands<S: AsRef<str>>(&mut self, values: &[S], label: &str) -> Result<&mut Self> {
        self.apply(|_| {
            if values.is_empty() {
                return Err(ArgvError::invalid(label, "at least one value is required"));
            }
            let mut tokens = Vec::with_capacity(values.len() + 1);
            tokens.push(END_OF_OPTIONS.to_string());
            for value in values {
                let value = value.as_ref();
                non_empty_str(value, label)?;
                tokens.push(value.to_string());
            }
            Ok(tokens)
        })
    }

    /// Commit the staged tokens to the target vector.
    ///
    /// Returns the number of tokens appended. If any operation failed, the
    /// first error is returned and the target is left untouched.
    pub fn finish(self) -> Result<usize> {
        if let Some(err) = self.failure {
            debug!(error = %err, "Discarding staged arguments after failure");
            return Err(err);
        }
        let appended = self.pending.len();
        self.target.extend(self.pending);
        debug!(appended, total = self.target.len(), "Committed arguments");
        Ok(appended)
    }
}

fn expect_scalar<'v>(value: &'v OptionValue, label: &str) -> Result<&'v Scalar> {
    match value {
        OptionValue::Scalar(scalar) => Ok(scalar),
        other => Err(ArgvError::mismatch(label, "a scalar", other.kind_name())),
    }
}

fn render_value(
    literal: &str,
    value: &Scalar,
    label: &str,
    check: Option<&Check>,
    mode: ValueMode,
) -> Result<Vec<String>> {
    if let Some(check) = check {
        check.run(value, label)?;
    }
    Ok(mode.render(literal, value.to_string()))
}

/// Explicit repetition count within `min..=max`; checked before any tokens
/// are allocated.
fn repetitions(value: &Scalar, label: &str, min: i64, max: usize) -> Result<usize> {
    let n = match value {
        Scalar::Int(n) => *n,
        #[allow(clippy::cast_possible_truncation)]
        Scalar::Float(f) if f.fract() == 0.0 && f.is_finite() => *f as i64,
        Scalar::Float(f) => {
            return Err(ArgvError::invalid(label, format!("must be an integer, got {f}")));
        }
        Scalar::Str(_) => {
            return Err(ArgvError::mismatch(label, "a boolean or an integer", "a string"));
        }
    };
    if n < min {
        return Err(ArgvError::invalid(label, format!("must be >= {min}, got {n}")));
    }
    if i64::try_from(max).is_ok_and(|max| n > max) {
        return Err(ArgvError::invalid(label, format!("must be <= {max}, got {n}")));
    }
    usize::try_from(n).map_err(|_| ArgvError::invalid(label, format!("must be >= 0, got {n}")))
}
