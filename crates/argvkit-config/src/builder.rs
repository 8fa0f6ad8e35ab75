use argvkit_error::Result;
use std::collections::BTreeMap;

use crate::ArgvConfig;

/// Programmatic construction of an [`ArgvConfig`].
///
/// ```rust
/// use argvkit_config::ArgvConfig;
///
/// let config = ArgvConfig::builder()
///     .program("tar", "/usr/local/bin/gtar")
///     .verify_binaries(true)
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.program_for("tar"), "/usr/local/bin/gtar");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    programs: BTreeMap<String, String>,
    verify_binaries: bool,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `program` wherever the wrapper for `tool` would run `tool`.
    #[must_use]
    pub fn program(mut self, tool: impl Into<String>, program: impl Into<String>) -> Self {
        self.programs.insert(tool.into(), program.into());
        self
    }

    #[must_use]
    pub fn verify_binaries(mut self, verify: bool) -> Self {
        self.verify_binaries = verify;
        self
    }

    pub fn build(self) -> Result<ArgvConfig> {
        let config = ArgvConfig {
            programs: self.programs,
            verify_binaries: self.verify_binaries,
        };
        config.validate()?;
        Ok(config)
    }
}
