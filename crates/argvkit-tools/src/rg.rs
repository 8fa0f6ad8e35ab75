//! `rg` (ripgrep)

use argvkit_builder::{Check, RepeatConfig, ValueConfig};
use argvkit_command::CommandSpec;
use argvkit_error::Result;
use argvkit_options::Options;
use argvkit_validation::{NumberRule, not_flag};
use serde::{Deserialize, Serialize};

use crate::build_command;

pub const PROGRAM: &str = "rg";

/// Values accepted by `rg --color=`.
pub const COLOR_CHOICES: &[&str] = &["never", "auto", "always", "ansi"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub ignore_case: bool,
    pub smart_case: bool,
    pub case_sensitive: bool,
    pub fixed_strings: bool,
    pub word_regexp: bool,
    pub line_number: bool,
    pub count: bool,
    pub files_with_matches: bool,
    pub hidden: bool,
    pub no_ignore: bool,
    pub color: Option<String>,
    pub globs: Vec<String>,
    pub types: Vec<String>,
    pub max_count: Option<u32>,
    pub context: Option<u32>,
    pub max_depth: Option<u32>,
    pub threads: Option<u32>,
    pub extra: Vec<String>,
}

impl SearchOptions {
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options::new()
            .set_flag("ignore_case", self.ignore_case)
            .set_flag("smart_case", self.smart_case)
            .set_flag("case_sensitive", self.case_sensitive)
            .set_flag("fixed_strings", self.fixed_strings)
            .set_flag("word_regexp", self.word_regexp)
            .set_flag("line_number", self.line_number)
            .set_flag("count", self.count)
            .set_flag("files_with_matches", self.files_with_matches)
            .set_flag("hidden", self.hidden)
            .set_flag("no_ignore", self.no_ignore)
            .set_opt("color", self.color.as_deref())
            .set_list("globs", &self.globs)
            .set_list("types", &self.types)
            .set_opt("max_count", self.max_count)
            .set_opt("context", self.context)
            .set_opt("max_depth", self.max_depth)
            .set_opt("threads", self.threads)
            .set_list("extra", &self.extra)
    }
}

/// `rg [-i|-S|-s] [-F] [-w] [-n] [-c] [-l] [--hidden] [--no-ignore]
/// [--color=WHEN] [-g GLOB]... [-t TYPE]... [-m N] [-C N] [--max-depth N]
/// [-j N] [extra] -- PATTERN [PATH...]`
///
/// The pattern follows the end-of-options marker, so patterns starting with
/// `-` are searched for literally instead of being parsed as flags.
pub fn search<S: AsRef<str>>(pattern: &str, paths: &[S], options: &Options) -> Result<CommandSpec> {
    let mut operands = Vec::with_capacity(paths.len() + 1);
    operands.push(pattern);
    operands.extend(paths.iter().map(AsRef::as_ref));

    build_command(PROGRAM, &[], options, |b| {
        b.mutually_exclusive(&["ignore_case", "smart_case", "case_sensitive"], "rg case mode")?
            .flag("ignore_case", "-i")?
            .flag("smart_case", "-S")?
            .flag("case_sensitive", "-s")?
            .flag("fixed_strings", "-F")?
            .flag("word_regexp", "-w")?
            .flag("line_number", "-n")?
            .flag("count", "-c")?
            .flag("files_with_matches", "-l")?
            .flag("hidden", "--hidden")?
            .flag("no_ignore", "--no-ignore")?
            .value(
                "color",
                "--color",
                ValueConfig::equals().check(Check::OneOf(COLOR_CHOICES)),
            )?
            .repeatable("globs", "-g", RepeatConfig::default())?
            .repeatable("types", "-t", RepeatConfig::check(Check::Rule(not_flag)))?
            .value_number("max_count", "-m", NumberRule::integer().min(1.0))?
            .value_number("context", "-C", NumberRule::integer().non_negative())?
            .value_number("max_depth", "--max-depth", NumberRule::integer().non_negative())?
            .value_number("threads", "-j", NumberRule::integer().min(1.0))?
            .extra()?
            .operands(&operands, "pattern")?;
        Ok(())
    })
}
