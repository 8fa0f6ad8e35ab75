//! `tar`
//!
//! Archives are addressed with `-f`; without it tar reads or writes the
//! default device, which is rarely what a caller wants but is not an error.

use argvkit_builder::{ArgBuilder, Check, CountConfig, RepeatConfig, ValueConfig};
use argvkit_command::CommandSpec;
use argvkit_error::Result;
use argvkit_options::{FlagOrValue, Options};
use argvkit_validation::NumberRule;
use serde::{Deserialize, Serialize};

use crate::{build_command, require};

pub const PROGRAM: &str = "tar";

const COMPRESSIONS: &[&str] = &["gzip", "bzip2", "xz", "zstd"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveOptions {
    /// Archive path for `-f`
    pub file: Option<String>,
    /// Directory for `-C`
    pub directory: Option<String>,
    pub gzip: bool,
    pub bzip2: bool,
    pub xz: bool,
    pub zstd: bool,
    /// Number of `-v` flags
    pub verbose: u8,
    pub preserve_permissions: bool,
    pub keep_old_files: bool,
    /// `--checkpoint` bare, or `--checkpoint=N`
    pub checkpoint: Option<FlagOrValue<u32>>,
    pub strip_components: Option<u32>,
    pub excludes: Vec<String>,
    pub extra: Vec<String>,
}

impl ArchiveOptions {
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options::new()
            .set_opt("file", self.file.as_deref())
            .set_opt("directory", self.directory.as_deref())
            .set_flag("gzip", self.gzip)
            .set_flag("bzip2", self.bzip2)
            .set_flag("xz", self.xz)
            .set_flag("zstd", self.zstd)
            .set_opt("verbose", (self.verbose > 0).then_some(self.verbose))
            .set_flag("preserve_permissions", self.preserve_permissions)
            .set_flag("keep_old_files", self.keep_old_files)
            .set_opt("checkpoint", self.checkpoint)
            .set_opt("strip_components", self.strip_components)
            .set_list("excludes", &self.excludes)
            .set_list("extra", &self.extra)
    }
}

/// Options shared by every mode, in emission order:
/// `[-z|-j|-J|--zstd] [-v]... [-p] [-k] [--checkpoint[=N]]
/// [--strip-components=N] [-C DIR] [--exclude=PATTERN]... [-f FILE] [extra]`
fn common(b: &mut ArgBuilder<'_>) -> Result<()> {
    b.mutually_exclusive(COMPRESSIONS, "tar compression")?
        .flag("gzip", "-z")?
        .flag("bzip2", "-j")?
        .flag("xz", "-J")?
        .flag("zstd", "--zstd")?
        .count("verbose", "-v", CountConfig::default())?
        .flag("preserve_permissions", "-p")?
        .flag("keep_old_files", "-k")?
        .bool_or_value(
            "checkpoint",
            "--checkpoint",
            ValueConfig::equals().check(Check::Number(NumberRule::integer().min(1.0))),
        )?
        .value(
            "strip_components",
            "--strip-components",
            ValueConfig::equals().check(Check::Number(NumberRule::integer().non_negative())),
        )?
        .value_token("directory", "-C")?
        .repeatable("excludes", "--exclude", RepeatConfig::default().equals())?
        .value_token("file", "-f")?
        .extra()?;
    Ok(())
}

/// `tar -c [common] -- PATH...`
pub fn create<S: AsRef<str>>(paths: &[S], options: &Options) -> Result<CommandSpec> {
    require(paths, "paths")?;
    build_command(PROGRAM, &["-c"], options, |b| {
        common(b)?;
        b.operands(paths, "path")?;
        Ok(())
    })
}

/// `tar -x [common] [-- MEMBER...]`
pub fn extract<S: AsRef<str>>(members: &[S], options: &Options) -> Result<CommandSpec> {
    build_command(PROGRAM, &["-x"], options, |b| {
        common(b)?;
        if !members.is_empty() {
            b.operands(members, "member")?;
        }
        Ok(())
    })
}

/// `tar -t [common]`
pub fn list(options: &Options) -> Result<CommandSpec> {
    build_command(PROGRAM, &["-t"], options, common)
}
