//! `pip`

use argvkit_builder::{ArgBuilder, Check, CountConfig, RepeatConfig, ValueMode};
use argvkit_command::CommandSpec;
use argvkit_error::{ArgvError, Result};
use argvkit_options::{OneOrMany, Options};
use argvkit_validation::not_flag;
use serde::{Deserialize, Serialize};

use crate::build_command;

pub const PROGRAM: &str = "pip";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallOptions {
    pub upgrade: bool,
    pub user: bool,
    pub no_deps: bool,
    pub pre: bool,
    pub no_cache_dir: bool,
    /// Requirements files for `-r`; a single path or a list
    pub requirements: Option<OneOrMany<String>>,
    pub constraints: Vec<String>,
    pub index_url: Option<String>,
    pub extra_index_urls: Vec<String>,
    pub target: Option<String>,
    /// Packages for `--only-binary`, joined with commas
    pub only_binary: Vec<String>,
    /// Number of `-v` flags
    pub verbose: u8,
    /// Number of `-q` flags
    pub quiet: u8,
    pub extra: Vec<String>,
}

impl InstallOptions {
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options::new()
            .set_flag("upgrade", self.upgrade)
            .set_flag("user", self.user)
            .set_flag("no_deps", self.no_deps)
            .set_flag("pre", self.pre)
            .set_flag("no_cache_dir", self.no_cache_dir)
            .set_opt("requirements", self.requirements.clone())
            .set_list("constraints", &self.constraints)
            .set_opt("index_url", self.index_url.as_deref())
            .set_list("extra_index_urls", &self.extra_index_urls)
            .set_opt("target", self.target.as_deref())
            .set_list("only_binary", &self.only_binary)
            .set_opt("verbose", (self.verbose > 0).then_some(self.verbose))
            .set_opt("quiet", (self.quiet > 0).then_some(self.quiet))
            .set_list("extra", &self.extra)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UninstallOptions {
    pub yes: bool,
    pub requirements: Option<OneOrMany<String>>,
    pub verbose: u8,
    pub quiet: u8,
    pub extra: Vec<String>,
}

impl UninstallOptions {
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options::new()
            .set_flag("yes", self.yes)
            .set_opt("requirements", self.requirements.clone())
            .set_opt("verbose", (self.verbose > 0).then_some(self.verbose))
            .set_opt("quiet", (self.quiet > 0).then_some(self.quiet))
            .set_list("extra", &self.extra)
    }
}

fn verbosity(b: &mut ArgBuilder<'_>) -> Result<()> {
    b.mutually_exclusive(&["verbose", "quiet"], "pip verbosity")?
        .count("verbose", "-v", CountConfig::default())?
        .count("quiet", "-q", CountConfig::default())?;
    Ok(())
}

/// Packages, or at least one requirements file, must be given.
fn require_targets<S>(packages: &[S], options: &Options) -> Result<()> {
    if packages.is_empty() && !options.contains("requirements") {
        return Err(ArgvError::invalid(
            "packages",
            "at least one package or requirements file is required",
        ));
    }
    Ok(())
}

/// `pip install [-U] [--user] [--no-deps] [--pre] [--no-cache-dir]
/// [-r FILE]... [-c FILE]... [--index-url URL] [--extra-index-url URL]...
/// [--target DIR] [--only-binary PKGS] [-v...|-q...] [extra] [-- PACKAGE...]`
pub fn install<S: AsRef<str>>(packages: &[S], options: &Options) -> Result<CommandSpec> {
    require_targets(packages, options)?;
    build_command(PROGRAM, &["install"], options, |b| {
        b.flag("upgrade", "-U")?
            .flag("user", "--user")?
            .flag("no_deps", "--no-deps")?
            .flag("pre", "--pre")?
            .flag("no_cache_dir", "--no-cache-dir")?
            .repeatable("requirements", "-r", RepeatConfig::default())?
            .repeatable("constraints", "-c", RepeatConfig::default())?
            .value_token("index_url", "--index-url")?
            .repeatable(
                "extra_index_urls",
                "--extra-index-url",
                RepeatConfig::check(Check::Rule(not_flag)),
            )?
            .value_token("target", "--target")?
            .value_csv("only_binary", "--only-binary", ValueMode::Pair)?;
        verbosity(b)?;
        b.extra()?;
        if !packages.is_empty() {
            b.operands(packages, "package")?;
        }
        Ok(())
    })
}

/// `pip uninstall [-y] [-r FILE]... [-v...|-q...] [extra] [-- PACKAGE...]`
pub fn uninstall<S: AsRef<str>>(packages: &[S], options: &Options) -> Result<CommandSpec> {
    require_targets(packages, options)?;
    build_command(PROGRAM, &["uninstall"], options, |b| {
        b.flag("yes", "-y")?
            .repeatable("requirements", "-r", RepeatConfig::default())?;
        verbosity(b)?;
        b.extra()?;
        if !packages.is_empty() {
            b.operands(packages, "package")?;
        }
        Ok(())
    })
}
