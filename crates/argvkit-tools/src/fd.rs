//! `fd`

use argvkit_builder::{Check, RepeatConfig};
use argvkit_command::CommandSpec;
use argvkit_error::Result;
use argvkit_options::Options;
use argvkit_validation::{NumberRule, not_flag};
use serde::{Deserialize, Serialize};

use crate::build_command;

pub const PROGRAM: &str = "fd";

/// Values accepted by `fd --type`.
pub const FILE_TYPES: &[&str] = &[
    "f", "file", "d", "directory", "l", "symlink", "x", "executable", "e", "empty", "s",
    "socket", "p", "pipe",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindOptions {
    pub hidden: bool,
    pub no_ignore: bool,
    pub case_sensitive: bool,
    pub ignore_case: bool,
    pub glob: bool,
    pub fixed_strings: bool,
    pub absolute_path: bool,
    pub follow: bool,
    pub full_path: bool,
    pub types: Vec<String>,
    pub extensions: Vec<String>,
    pub excludes: Vec<String>,
    pub max_depth: Option<u32>,
    pub min_depth: Option<u32>,
    pub max_results: Option<u32>,
    pub threads: Option<u32>,
    pub extra: Vec<String>,
}

impl FindOptions {
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options::new()
            .set_flag("hidden", self.hidden)
            .set_flag("no_ignore", self.no_ignore)
            .set_flag("case_sensitive", self.case_sensitive)
            .set_flag("ignore_case", self.ignore_case)
            .set_flag("glob", self.glob)
            .set_flag("fixed_strings", self.fixed_strings)
            .set_flag("absolute_path", self.absolute_path)
            .set_flag("follow", self.follow)
            .set_flag("full_path", self.full_path)
            .set_list("types", &self.types)
            .set_list("extensions", &self.extensions)
            .set_list("excludes", &self.excludes)
            .set_opt("max_depth", self.max_depth)
            .set_opt("min_depth", self.min_depth)
            .set_opt("max_results", self.max_results)
            .set_opt("threads", self.threads)
            .set_list("extra", &self.extra)
    }
}

/// `fd [-H] [-I] [-s|-i] [-g|-F] [-a] [-L] [-p] [-t T]... [-e EXT]...
/// [-E GLOB]... [--max-depth N] [--min-depth N] [--max-results N] [-j N]
/// [extra] PATTERN [-- PATH...]`
///
/// The pattern is a bare positional and must not start with `-`; search
/// roots follow the end-of-options marker.
pub fn find<S: AsRef<str>>(pattern: &str, paths: &[S], options: &Options) -> Result<CommandSpec> {
    build_command(PROGRAM, &[], options, |b| {
        b.mutually_exclusive(&["case_sensitive", "ignore_case"], "fd case mode")?
            .mutually_exclusive(&["glob", "fixed_strings"], "fd pattern syntax")?
            .flag("hidden", "-H")?
            .flag("no_ignore", "-I")?
            .flag("case_sensitive", "-s")?
            .flag("ignore_case", "-i")?
            .flag("glob", "-g")?
            .flag("fixed_strings", "-F")?
            .flag("absolute_path", "-a")?
            .flag("follow", "-L")?
            .flag("full_path", "-p")?
            .repeatable("types", "-t", RepeatConfig::check(Check::OneOf(FILE_TYPES)))?
            .repeatable("extensions", "-e", RepeatConfig::check(Check::Rule(not_flag)))?
            .repeatable("excludes", "-E", RepeatConfig::default())?
            .value_number("max_depth", "--max-depth", NumberRule::integer().non_negative())?
            .value_number("min_depth", "--min-depth", NumberRule::integer().non_negative())?
            .value_number("max_results", "--max-results", NumberRule::integer().min(1.0))?
            .value_number("threads", "-j", NumberRule::integer().min(1.0))?
            .extra()?
            .positional(pattern, "pattern")?;
        if !paths.is_empty() {
            b.operands(paths, "path")?;
        }
        Ok(())
    })
}
