//! Error taxonomy for argvkit
//!
//! Every builder, validator and wrapper in the workspace fails with
//! [`ArgvError`]. Errors are raised at the point of detection and abort the
//! build; there is no aggregation of multiple failures.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the workspace.
pub type Result<T, E = ArgvError> = std::result::Result<T, E>;

/// Library-level error type.
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `InvalidArgument` | a value failed a shape, range or token-safety rule |
/// | `ConflictingOptions` | more than one key of an exclusive group was set |
/// | `TypeMismatch` | an option held the wrong kind of value |
/// | `BinaryNotFound` | a path-like executable reference does not exist |
/// | `BinaryNotExecutable` | a path-like executable reference lacks the exec bit |
/// | `BinaryNotInPath` | a bare executable name is not on the search path |
/// | `Config` | the configuration document or builder was invalid |
///
/// # Example
///
/// ```rust
/// use argvkit_error::{ArgvError, ErrorKind};
///
/// let err = ArgvError::invalid("pattern", "must not start with '-'");
/// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
/// assert!(err.to_string().contains("pattern"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgvError {
    #[error("Invalid argument '{label}': {reason}")]
    InvalidArgument { label: String, reason: String },

    #[error("Conflicting options for {label}: {} cannot be combined", .keys.join(", "))]
    ConflictingOptions { label: String, keys: Vec<String> },

    #[error("Type mismatch for '{label}': expected {expected}, found {found}")]
    TypeMismatch {
        label: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Binary for '{label}' not found at {}", .path.display())]
    BinaryNotFound { label: String, path: PathBuf },

    #[error("Binary for '{label}' is not executable: {}", .path.display())]
    BinaryNotExecutable { label: String, path: PathBuf },

    #[error("Binary for '{label}' not found in PATH: {name}")]
    BinaryNotInPath { label: String, name: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Field-free discriminant of [`ArgvError`], for callers that only need to
/// branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    ConflictingOptions,
    TypeMismatch,
    BinaryNotFound,
    BinaryNotExecutable,
    BinaryNotInPath,
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid_argument"),
            Self::ConflictingOptions => write!(f, "conflicting_options"),
            Self::TypeMismatch => write!(f, "type_mismatch"),
            Self::BinaryNotFound => write!(f, "binary_not_found"),
            Self::BinaryNotExecutable => write!(f, "binary_not_executable"),
            Self::BinaryNotInPath => write!(f, "binary_not_in_path"),
            Self::Config => write!(f, "config"),
        }
    }
}

impl ArgvError {
    /// Shorthand for an `InvalidArgument` error.
    #[must_use]
    pub fn invalid(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a `TypeMismatch` error.
    #[must_use]
    pub fn mismatch(label: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            label: label.into(),
            expected,
            found,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::ConflictingOptions { .. } => ErrorKind::ConflictingOptions,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::BinaryNotFound { .. } => ErrorKind::BinaryNotFound,
            Self::BinaryNotExecutable { .. } => ErrorKind::BinaryNotExecutable,
            Self::BinaryNotInPath { .. } => ErrorKind::BinaryNotInPath,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Get a user-friendly error message with context and actionable suggestions.
    ///
    /// ```text
    /// Error: <user message>
    ///
    /// Context: <context if available>
    ///
    /// Suggestions:
    ///   • <suggestion 1>
    /// ```
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = format!("Error: {}\n", self.user_message());

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }
}

/// Configuration-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Environment,
    Configuration,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "Validation"),
            Self::Conflict => write!(f, "Conflict"),
            Self::Environment => write!(f, "Environment"),
            Self::Configuration => write!(f, "Configuration"),
        }
    }
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile(reason) => {
                format!("Configuration file has invalid format: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => format!("Configuration file not found: {path}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile(_) => Some(
                "Configuration files must be valid TOML with an optional [programs] table."
                    .to_string(),
            ),
            Self::InvalidValue { key, .. } => Some(format!(
                "The '{key}' entry must be a non-empty program name or path that does not start with '-'."
            )),
            Self::NotFound { .. } => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile(_) => vec![
                "Check the TOML syntax using a TOML validator".to_string(),
                "Keep program overrides under the [programs] table".to_string(),
            ],
            Self::InvalidValue { .. } => vec![
                "Use a bare program name (e.g. 'gtar') or a path (e.g. '/usr/local/bin/gtar')"
                    .to_string(),
                "Remove the entry to fall back to the default program".to_string(),
            ],
            Self::NotFound { .. } => vec![
                "Check the configuration path".to_string(),
                "Build the configuration programmatically with ArgvConfig::builder()".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

impl UserFriendlyError for ArgvError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidArgument { label, reason } => {
                format!("The value given for '{label}' was rejected: {reason}")
            }
            Self::ConflictingOptions { label, keys } => format!(
                "Options {} cannot be used together for {label}",
                keys.join(" and ")
            ),
            Self::TypeMismatch {
                label,
                expected,
                found,
            } => format!("Option '{label}' expects {expected} but was given {found}"),
            Self::BinaryNotFound { path, .. } => {
                format!("No program exists at {}", path.display())
            }
            Self::BinaryNotExecutable { path, .. } => {
                format!("The program at {} is not executable", path.display())
            }
            Self::BinaryNotInPath { name, .. } => {
                format!("The program '{name}' could not be found on PATH")
            }
            Self::Config(err) => err.user_message(),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidArgument { .. } => Some(
                "Values that start with '-' are rejected where a tool would read them as flags."
                    .to_string(),
            ),
            Self::ConflictingOptions { .. } => {
                Some("No arguments were produced; the request was rejected as a whole.".to_string())
            }
            Self::TypeMismatch { .. } => None,
            Self::BinaryNotFound { .. }
            | Self::BinaryNotExecutable { .. }
            | Self::BinaryNotInPath { .. } => Some(
                "References containing a path separator are checked on disk; bare names are looked up on PATH."
                    .to_string(),
            ),
            Self::Config(err) => err.context(),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidArgument { .. } => vec![
                "Fix the value and build the command again".to_string(),
                "Use the 'extra' passthrough list for raw tokens the wrapper does not model"
                    .to_string(),
            ],
            Self::ConflictingOptions { keys, .. } => {
                vec![format!("Set only one of: {}", keys.join(", "))]
            }
            Self::TypeMismatch { expected, .. } => {
                vec![format!("Pass {expected} for this option")]
            }
            Self::BinaryNotFound { .. } => vec![
                "Install the tool or correct the configured path".to_string(),
                "Configure an override under [programs]".to_string(),
            ],
            Self::BinaryNotExecutable { path, .. } => {
                vec![format!("Mark the file executable: chmod +x {}", path.display())]
            }
            Self::BinaryNotInPath { name, .. } => vec![
                format!("Install '{name}' with your package manager"),
                "Add the directory containing the program to PATH".to_string(),
                "Configure an absolute path under [programs]".to_string(),
            ],
            Self::Config(err) => err.suggestions(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } | Self::TypeMismatch { .. } => ErrorCategory::Validation,
            Self::ConflictingOptions { .. } => ErrorCategory::Conflict,
            Self::BinaryNotFound { .. }
            | Self::BinaryNotExecutable { .. }
            | Self::BinaryNotInPath { .. } => ErrorCategory::Environment,
            Self::Config(_) => ErrorCategory::Configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            ArgvError::invalid("x", "bad").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            ArgvError::mismatch("x", "a list", "a map").kind(),
            ErrorKind::TypeMismatch
        );
        let err = ArgvError::BinaryNotInPath {
            label: "tar".to_string(),
            name: "gtar".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::BinaryNotInPath);
        assert_eq!(err.kind().to_string(), "binary_not_in_path");
    }

    #[test]
    fn test_conflicting_options_message_lists_keys() {
        let err = ArgvError::ConflictingOptions {
            label: "rm".to_string(),
            keys: vec!["force".to_string(), "interactive".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Conflicting options for rm: force, interactive cannot be combined"
        );
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    #[test]
    fn test_binary_errors_have_distinct_remediation() {
        let not_exec = ArgvError::BinaryNotExecutable {
            label: "tool".to_string(),
            path: PathBuf::from("/opt/tool"),
        };
        let not_in_path = ArgvError::BinaryNotInPath {
            label: "tool".to_string(),
            name: "tool".to_string(),
        };

        assert!(not_exec.suggestions().iter().any(|s| s.contains("chmod +x")));
        assert!(not_in_path.suggestions().iter().any(|s| s.contains("PATH")));
        assert_eq!(not_exec.category(), ErrorCategory::Environment);
    }

    #[test]
    fn test_display_for_user_layout() {
        let err = ArgvError::invalid("pattern", "must not start with '-'");
        let message = err.display_for_user();
        assert!(message.starts_with("Error: "));
        assert!(message.contains("Context:"));
        assert!(message.contains("Suggestions:"));
        assert!(message.contains("  • "));
    }

    #[test]
    fn test_config_error_converts() {
        let err: ArgvError = ConfigError::NotFound {
            path: "argvkit.toml".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.context().is_none());
    }
}
