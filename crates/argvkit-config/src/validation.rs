use argvkit_error::{ConfigError, Result};
use argvkit_validation::not_flag_str;

use crate::ArgvConfig;

impl ArgvConfig {
    /// Tool names and program overrides must be non-empty and must not look
    /// like flags.
    pub(crate) fn validate(&self) -> Result<()> {
        for (tool, program) in &self.programs {
            if not_flag_str(tool, "programs").is_err() {
                return Err(ConfigError::InvalidValue {
                    key: "programs".to_string(),
                    value: format!("tool name '{tool}' must be non-empty and not start with '-'"),
                }
                .into());
            }
            if not_flag_str(program, tool).is_err() {
                return Err(ConfigError::InvalidValue {
                    key: format!("programs.{tool}"),
                    value: format!("program '{program}' must be non-empty and not start with '-'"),
                }
                .into());
            }
        }
        Ok(())
    }
}
