use argvkit_error::{ConfigError, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::ConfigBuilder;

/// Program overrides and verification settings.
///
/// TOML form:
///
/// ```toml
/// verify_binaries = true
///
/// [programs]
/// tar = "/usr/local/bin/gtar"
/// cp = "gcp"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArgvConfig {
    /// Tool name -> program name or path
    pub programs: BTreeMap<String, String>,
    /// Resolve each produced program with `bin()` before returning it
    pub verify_binaries: bool,
}

impl ArgvConfig {
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::InvalidFile(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the TOML file at `path`.
    ///
    /// A missing file is an error; callers that treat it as optional should
    /// check for `ConfigError::NotFound` and fall back to the default.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound {
                    path: path.to_string(),
                }
                .into());
            }
            Err(e) => {
                return Err(ConfigError::InvalidFile(format!(
                    "Failed to read config file {path}: {e}"
                ))
                .into());
            }
        };

        let config = Self::from_toml_str(&content).map_err(|err| match err {
            argvkit_error::ArgvError::Config(ConfigError::InvalidFile(reason)) => {
                ConfigError::InvalidFile(format!("{path}: {reason}")).into()
            }
            other => other,
        })?;
        debug!(path = %path, overrides = config.programs.len(), "Loaded argvkit config");
        Ok(config)
    }

    /// Program to run for `tool`: the configured override, or the tool name.
    #[must_use]
    pub fn program_for<'a>(&'a self, tool: &'a str) -> &'a str {
        self.programs.get(tool).map_or(tool, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argvkit_error::{ArgvError, ErrorKind};
    use camino::Utf8PathBuf;

    #[test]
    fn test_from_toml_str() {
        let config = ArgvConfig::from_toml_str(
            r#"
verify_binaries = true

[programs]
tar = "/usr/local/bin/gtar"
cp = "gcp"
"#,
        )
        .unwrap();

        assert!(config.verify_binaries);
        assert_eq!(config.program_for("tar"), "/usr/local/bin/gtar");
        assert_eq!(config.program_for("cp"), "gcp");
        assert_eq!(config.program_for("rm"), "rm");
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(ArgvConfig::from_toml_str("").unwrap(), ArgvConfig::default());
    }

    #[test]
    fn test_malformed_toml() {
        let err = ArgvConfig::from_toml_str("programs = [").unwrap_err();
        assert!(matches!(err, ArgvError::Config(ConfigError::InvalidFile(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ArgvConfig::from_toml_str("verify = true").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let err = ArgvConfig::from_toml_str("[programs]\ntar = \"--gtar\"").unwrap_err();
        assert!(matches!(
            err,
            ArgvError::Config(ConfigError::InvalidValue { ref key, .. }) if key == "programs.tar"
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("argvkit.toml")).unwrap();
        let err = ArgvConfig::load(&path).unwrap_err();
        assert!(matches!(err, ArgvError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("argvkit.toml")).unwrap();
        std::fs::write(&path, "[programs]\nrg = \"/opt/rg/bin/rg\"\n").unwrap();

        let config = ArgvConfig::load(&path).unwrap();
        assert_eq!(config.program_for("rg"), "/opt/rg/bin/rg");
        assert!(!config.verify_binaries);
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("bad.toml")).unwrap();
        std::fs::write(&path, "verify_binaries = \"yes\"").unwrap();

        let err = ArgvConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
