//! Config-aware command finishing

use argvkit_command::CommandSpec;
use argvkit_config::ArgvConfig;
use argvkit_error::Result;
use argvkit_validation::{Environment, SystemEnvironment, bin};
use tracing::debug;

/// Applies an [`ArgvConfig`] to commands produced by the tool wrappers.
///
/// The wrapper's program name doubles as the tool key: a `cp` command is
/// looked up under `programs.cp`.
///
/// # Example
///
/// ```rust
/// use argvkit_config::ArgvConfig;
/// use argvkit_options::Options;
/// use argvkit_tools::{Toolbox, tar};
///
/// # fn main() -> argvkit_error::Result<()> {
/// let config = ArgvConfig::builder()
///     .program("tar", "/usr/local/bin/gtar")
///     .build()?;
/// let toolbox = Toolbox::new(config);
///
/// let cmd = toolbox.finalize(tar::list(&Options::new())?)?;
/// assert_eq!(cmd.program, "/usr/local/bin/gtar");
/// assert_eq!(cmd.args, ["-t"]);
/// # Ok(())
/// # }
/// ```
pub struct Toolbox {
    config: ArgvConfig,
    env: Box<dyn Environment + Send + Sync>,
}

impl std::fmt::Debug for Toolbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolbox")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Toolbox {
    fn default() -> Self {
        Self::new(ArgvConfig::default())
    }
}

impl Toolbox {
    /// Toolbox that verifies binaries against the real environment.
    #[must_use]
    pub fn new(config: ArgvConfig) -> Self {
        Self::with_environment(config, SystemEnvironment)
    }

    #[must_use]
    pub fn with_environment<E>(config: ArgvConfig, env: E) -> Self
    where
        E: Environment + Send + Sync + 'static,
    {
        Self {
            config,
            env: Box::new(env),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ArgvConfig {
        &self.config
    }

    /// Swap in the configured program and, when `verify_binaries` is set,
    /// resolve it with [`bin`].
    pub fn finalize(&self, cmd: CommandSpec) -> Result<CommandSpec> {
        let tool = cmd.program.clone();
        let program = self.config.program_for(&tool).to_string();
        if program != tool {
            debug!(tool = %tool, program = %program, "Applying program override");
        }
        if self.config.verify_binaries {
            bin(self.env.as_ref(), &program, &tool)?;
        }
        Ok(cmd.with_program(program))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cp, rm};
    use argvkit_error::ErrorKind;
    use argvkit_options::Options;
    use std::collections::HashSet;
    use std::path::Path;

    #[derive(Default)]
    struct FakeEnvironment {
        on_path: HashSet<&'static str>,
        executables: HashSet<&'static str>,
    }

    impl Environment for FakeEnvironment {
        fn is_in_path(&self, name: &str) -> bool {
            self.on_path.contains(name)
        }

        fn exists(&self, path: &Path) -> bool {
            path.to_str().is_some_and(|p| self.executables.contains(p))
        }

        fn is_executable(&self, path: &Path) -> bool {
            self.exists(path)
        }
    }

    #[test]
    fn test_finalize_without_config_is_identity() {
        let cmd = cp::copy(&["a"], "b", &Options::new()).unwrap();
        let out = Toolbox::default().finalize(cmd.clone()).unwrap();
        assert_eq!(out, cmd);
    }

    #[test]
    fn test_finalize_applies_override_and_verifies() {
        let config = ArgvConfig::builder()
            .program("cp", "/opt/gnu/bin/cp")
            .verify_binaries(true)
            .build()
            .unwrap();
        let env = FakeEnvironment {
            executables: HashSet::from(["/opt/gnu/bin/cp"]),
            ..Default::default()
        };
        let toolbox = Toolbox::with_environment(config, env);

        let cmd = toolbox
            .finalize(cp::copy(&["a"], "b", &Options::new()).unwrap())
            .unwrap();
        assert_eq!(cmd.argv(), ["/opt/gnu/bin/cp", "--", "a", "b"]);
    }

    #[test]
    fn test_finalize_reports_missing_binary() {
        let config = ArgvConfig::builder().verify_binaries(true).build().unwrap();
        let toolbox = Toolbox::with_environment(config, FakeEnvironment::default());

        let err = toolbox
            .finalize(rm::remove(&["x"], &Options::new()).unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BinaryNotInPath);
    }

    #[test]
    fn test_finalize_skips_verification_when_disabled() {
        let config = ArgvConfig::builder()
            .program("rm", "/nowhere/rm")
            .build()
            .unwrap();
        let toolbox = Toolbox::with_environment(config, FakeEnvironment::default());
        let cmd = toolbox
            .finalize(rm::remove(&["x"], &Options::new()).unwrap())
            .unwrap();
        assert_eq!(cmd.program, "/nowhere/rm");
    }
}
