//! `xclip`
//!
//! xclip takes single-dash long options (`-selection clipboard`).

use argvkit_builder::{ArgBuilder, Check, ValueConfig};
use argvkit_command::CommandSpec;
use argvkit_error::Result;
use argvkit_options::Options;
use argvkit_validation::NumberRule;
use serde::{Deserialize, Serialize};

use crate::build_command;

pub const PROGRAM: &str = "xclip";

pub const SELECTIONS: &[&str] = &["primary", "secondary", "clipboard"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardOptions {
    pub selection: Option<String>,
    /// Target atom, e.g. `image/png`
    pub target: Option<String>,
    pub display: Option<String>,
    pub loops: Option<u32>,
    pub remove_last_newline: bool,
    pub quiet: bool,
    pub silent: bool,
    pub verbose: bool,
    pub extra: Vec<String>,
}

impl ClipboardOptions {
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options::new()
            .set_opt("selection", self.selection.as_deref())
            .set_opt("target", self.target.as_deref())
            .set_opt("display", self.display.as_deref())
            .set_opt("loops", self.loops)
            .set_flag("remove_last_newline", self.remove_last_newline)
            .set_flag("quiet", self.quiet)
            .set_flag("silent", self.silent)
            .set_flag("verbose", self.verbose)
            .set_list("extra", &self.extra)
    }
}

/// `[-selection SEL] [-target ATOM] [-display DISPLAY] [-loops N]
/// [-rmlastnl] [-quiet|-silent|-verbose] [extra]`
fn common(b: &mut ArgBuilder<'_>) -> Result<()> {
    b.mutually_exclusive(&["quiet", "silent", "verbose"], "xclip verbosity")?
        .value(
            "selection",
            "-selection",
            ValueConfig::pair().check(Check::OneOf(SELECTIONS)),
        )?
        .value_token("target", "-target")?
        .value_token("display", "-display")?
        .value_number("loops", "-loops", NumberRule::integer().min(1.0))?
        .flag("remove_last_newline", "-rmlastnl")?
        .flag("quiet", "-quiet")?
        .flag("silent", "-silent")?
        .flag("verbose", "-verbose")?
        .extra()?;
    Ok(())
}

/// `xclip -in [common]`: read stdin into the selection.
pub fn copy(options: &Options) -> Result<CommandSpec> {
    build_command(PROGRAM, &["-in"], options, common)
}

/// `xclip -out [common]`: print the selection.
pub fn paste(options: &Options) -> Result<CommandSpec> {
    build_command(PROGRAM, &["-out"], options, common)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argvkit_error::ErrorKind;

    #[test]
    fn test_copy_to_clipboard() {
        let opts = ClipboardOptions {
            selection: Some("clipboard".to_string()),
            target: Some("image/png".to_string()),
            ..Default::default()
        };
        let cmd = copy(&opts.to_options()).unwrap();
        assert_eq!(
            cmd.argv(),
            ["xclip", "-in", "-selection", "clipboard", "-target", "image/png"]
        );
    }

    #[test]
    fn test_paste_defaults() {
        let cmd = paste(&Options::new()).unwrap();
        assert_eq!(cmd.args, ["-out"]);
    }

    #[test]
    fn test_unknown_selection() {
        let opts = Options::new().set("selection", "tertiary");
        let err = paste(&opts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("primary, secondary, clipboard"));
    }

    #[test]
    fn test_target_must_not_look_like_a_flag() {
        let opts = Options::new().set("target", "-noutf8");
        assert_eq!(
            paste(&opts).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_verbosity_modes_conflict() {
        let opts = ClipboardOptions {
            quiet: true,
            verbose: true,
            ..Default::default()
        };
        assert_eq!(
            copy(&opts.to_options()).unwrap_err().kind(),
            ErrorKind::ConflictingOptions
        );
    }
}
