//! Value rules
//!
//! Every rule takes the value under test and a human-readable label that is
//! carried into the error. Rules fail on the first violation.

use argvkit_error::{ArgvError, Result};
use argvkit_options::Scalar;

/// A reusable validation rule: `(value, label) -> Ok | Err`.
pub type Rule = fn(&Scalar, &str) -> Result<()>;

/// `v` must be a string of length ≥ 1.
pub fn non_empty_string(v: &Scalar, label: &str) -> Result<()> {
    match v {
        Scalar::Str(s) => non_empty_str(s, label),
        other => Err(ArgvError::mismatch(label, "a string", other.kind_name())),
    }
}

/// `v` must be a non-empty string that does not start with `-`.
///
/// Tools invoked without a shell would read such a value as an option, and
/// quoting cannot help there; rejecting it is the only guard.
pub fn not_flag(v: &Scalar, label: &str) -> Result<()> {
    match v {
        Scalar::Str(s) => not_flag_str(s, label),
        other => Err(ArgvError::mismatch(label, "a string", other.kind_name())),
    }
}

pub fn non_empty_str(s: &str, label: &str) -> Result<()> {
    if s.is_empty() {
        return Err(ArgvError::invalid(label, "must be a non-empty string"));
    }
    Ok(())
}

pub fn not_flag_str(s: &str, label: &str) -> Result<()> {
    non_empty_str(s, label)?;
    if s.starts_with('-') {
        return Err(ArgvError::invalid(
            label,
            format!("'{s}' must not start with '-'"),
        ));
    }
    Ok(())
}

fn number(v: &Scalar, label: &str) -> Result<f64> {
    match v.as_f64() {
        Some(n) if n.is_finite() => Ok(n),
        Some(_) => Err(ArgvError::invalid(label, "must be a finite number")),
        None => Err(ArgvError::invalid(
            label,
            format!("must be a number, got {}", v.kind_name()),
        )),
    }
}

/// `v` must be a whole number. Floats without a fractional part qualify.
pub fn integer(v: &Scalar, label: &str) -> Result<()> {
    let n = number(v, label)?;
    if n.fract() != 0.0 {
        return Err(ArgvError::invalid(label, format!("must be an integer, got {n}")));
    }
    Ok(())
}

pub fn integer_min(v: &Scalar, label: &str, min: i64) -> Result<()> {
    integer(v, label)?;
    #[allow(clippy::cast_precision_loss)]
    let bound = min as f64;
    if number(v, label)? < bound {
        return Err(ArgvError::invalid(label, format!("must be >= {min}, got {v}")));
    }
    Ok(())
}

pub fn integer_non_negative(v: &Scalar, label: &str) -> Result<()> {
    integer_min(v, label, 0)
}

/// `v` must be a finite number ≥ `min` (pass `0.0` for the default bound).
pub fn number_min(v: &Scalar, label: &str, min: f64) -> Result<()> {
    if number(v, label)? < min {
        return Err(ArgvError::invalid(label, format!("must be >= {min}, got {v}")));
    }
    Ok(())
}

pub fn number_non_negative(v: &Scalar, label: &str) -> Result<()> {
    number_min(v, label, 0.0)
}

/// `v` must be one of the `allowed` strings.
pub fn one_of(v: &Scalar, label: &str, allowed: &[&str]) -> Result<()> {
    non_empty_string(v, label)?;
    let text = v.to_string();
    if allowed.contains(&text.as_str()) {
        Ok(())
    } else {
        Err(ArgvError::invalid(
            label,
            format!("'{text}' is not one of: {}", allowed.join(", ")),
        ))
    }
}

/// Numeric sub-options of a value rule.
///
/// ```rust
/// use argvkit_options::Scalar;
/// use argvkit_validation::NumberRule;
///
/// let rule = NumberRule::integer().min(1.0);
/// assert!(rule.check(&Scalar::from(3), "count").is_ok());
/// assert!(rule.check(&Scalar::from(0), "count").is_err());
/// assert!(rule.check(&Scalar::from(1.5), "count").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberRule {
    pub min: Option<f64>,
    pub integer: bool,
    pub non_negative: bool,
}

impl NumberRule {
    /// Any finite number.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn integer() -> Self {
        Self {
            integer: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }

    pub fn check(&self, v: &Scalar, label: &str) -> Result<()> {
        number(v, label)?;
        if self.integer {
            integer(v, label)?;
        }
        if self.non_negative {
            number_non_negative(v, label)?;
        }
        if let Some(min) = self.min {
            number_min(v, label, min)?;
        }
        Ok(())
    }
}
