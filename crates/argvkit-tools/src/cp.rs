//! `cp`

use argvkit_command::CommandSpec;
use argvkit_error::Result;
use argvkit_options::Options;
use serde::{Deserialize, Serialize};

use crate::{build_command, require};

pub const PROGRAM: &str = "cp";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyOptions {
    pub archive: bool,
    pub recursive: bool,
    pub force: bool,
    pub interactive: bool,
    pub no_clobber: bool,
    pub update: bool,
    pub dereference: bool,
    /// Attributes for `--preserve=` (e.g. `mode`, `timestamps`)
    pub preserve: Vec<String>,
    pub verbose: bool,
    pub extra: Vec<String>,
}

impl CopyOptions {
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options::new()
            .set_flag("archive", self.archive)
            .set_flag("recursive", self.recursive)
            .set_flag("force", self.force)
            .set_flag("interactive", self.interactive)
            .set_flag("no_clobber", self.no_clobber)
            .set_flag("update", self.update)
            .set_flag("dereference", self.dereference)
            .set_list("preserve", &self.preserve)
            .set_flag("verbose", self.verbose)
            .set_list("extra", &self.extra)
    }
}

/// `cp [-a] [-r] [-f|-i|-n] [-u] [-L] [--preserve=LIST] [-v] [extra] -- SOURCE... DEST`
///
/// # Example
///
/// ```rust
/// use argvkit_tools::cp::{copy, CopyOptions};
///
/// let opts = CopyOptions { recursive: true, verbose: true, ..Default::default() };
/// let cmd = copy(&["a", "b"], "dst", &opts.to_options()).unwrap();
/// assert_eq!(cmd.args, ["-r", "-v", "--", "a", "b", "dst"]);
/// ```
pub fn copy<S: AsRef<str>>(sources: &[S], dest: &str, options: &Options) -> Result<CommandSpec> {
    require(sources, "sources")?;
    let operands: Vec<&str> = sources
        .iter()
        .map(AsRef::as_ref)
        .chain(std::iter::once(dest))
        .collect();

    build_command(PROGRAM, &[], options, |b| {
        b.mutually_exclusive(&["force", "interactive", "no_clobber"], "cp")?
            .flag("archive", "-a")?
            .flag("recursive", "-r")?
            .flag("force", "-f")?
            .flag("interactive", "-i")?
            .flag("no_clobber", "-n")?
            .flag("update", "-u")?
            .flag("dereference", "-L")?
            .value_csv("preserve", "--preserve", argvkit_builder::ValueMode::Equals)?
            .flag("verbose", "-v")?
            .extra()?
            .operands(&operands, "path")?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argvkit_error::{ArgvError, ErrorKind};

    #[test]
    fn test_copy_minimal() {
        let cmd = copy(&["a"], "b", &Options::new()).unwrap();
        assert_eq!(cmd.program, "cp");
        assert_eq!(cmd.args, ["--", "a", "b"]);
    }

    #[test]
    fn test_copy_flag_order_is_fixed() {
        let opts = CopyOptions {
            verbose: true,
            preserve: vec!["mode".to_string(), "timestamps".to_string()],
            update: true,
            archive: true,
            no_clobber: true,
            ..Default::default()
        };
        let cmd = copy(&["src"], "dst", &opts.to_options()).unwrap();
        assert_eq!(
            cmd.args,
            ["-a", "-n", "-u", "--preserve=mode,timestamps", "-v", "--", "src", "dst"]
        );
    }

    #[test]
    fn test_copy_dash_prefixed_sources_follow_marker() {
        let cmd = copy(&["-rf"], "dst", &Options::new()).unwrap();
        assert_eq!(cmd.args, ["--", "-rf", "dst"]);
    }

    #[test]
    fn test_copy_conflicting_overwrite_modes() {
        let opts = CopyOptions {
            force: true,
            no_clobber: true,
            ..Default::default()
        };
        let err = copy(&["a"], "b", &opts.to_options()).unwrap_err();
        assert_eq!(
            err,
            ArgvError::ConflictingOptions {
                label: "cp".to_string(),
                keys: vec!["force".to_string(), "no_clobber".to_string()],
            }
        );
    }

    #[test]
    fn test_copy_requires_sources_and_dest() {
        let none: [&str; 0] = [];
        assert_eq!(
            copy(&none, "b", &Options::new()).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            copy(&["a"], "", &Options::new()).unwrap_err().kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn test_copy_extra_before_operands() {
        let opts = CopyOptions {
            extra: vec!["--sparse=always".to_string()],
            ..Default::default()
        };
        let cmd = copy(&["a"], "b", &opts.to_options()).unwrap();
        assert_eq!(cmd.args, ["--sparse=always", "--", "a", "b"]);
    }
}
