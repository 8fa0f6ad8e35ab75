//! `rm`

use argvkit_command::CommandSpec;
use argvkit_error::Result;
use argvkit_options::Options;
use serde::{Deserialize, Serialize};

use crate::{build_command, require};

pub const PROGRAM: &str = "rm";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoveOptions {
    pub recursive: bool,
    pub force: bool,
    pub interactive: bool,
    pub dir: bool,
    pub one_file_system: bool,
    pub verbose: bool,
    pub extra: Vec<String>,
}

impl RemoveOptions {
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options::new()
            .set_flag("recursive", self.recursive)
            .set_flag("force", self.force)
            .set_flag("interactive", self.interactive)
            .set_flag("dir", self.dir)
            .set_flag("one_file_system", self.one_file_system)
            .set_flag("verbose", self.verbose)
            .set_list("extra", &self.extra)
    }
}

/// `rm [-r] [-f|-i] [-d] [--one-file-system] [-v] [extra] -- PATH...`
pub fn remove<S: AsRef<str>>(paths: &[S], options: &Options) -> Result<CommandSpec> {
    require(paths, "paths")?;
    build_command(PROGRAM, &[], options, |b| {
        b.mutually_exclusive(&["force", "interactive"], "rm")?
            .flag("recursive", "-r")?
            .flag("force", "-f")?
            .flag("interactive", "-i")?
            .flag("dir", "-d")?
            .flag("one_file_system", "--one-file-system")?
            .flag("verbose", "-v")?
            .extra()?
            .operands(paths, "path")?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argvkit_error::ErrorKind;

    #[test]
    fn test_remove_recursive_force() {
        let opts = RemoveOptions {
            recursive: true,
            force: true,
            ..Default::default()
        };
        let cmd = remove(&["build", "-weird"], &opts.to_options()).unwrap();
        assert_eq!(cmd.argv(), ["rm", "-r", "-f", "--", "build", "-weird"]);
    }

    #[test]
    fn test_remove_force_and_interactive_conflict() {
        let opts = Options::new().set("force", true).set("interactive", true);
        let err = remove(&["x"], &opts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConflictingOptions);
        assert!(err.to_string().contains("force, interactive"));
    }

    #[test]
    fn test_remove_false_flags_are_ignored() {
        let opts = Options::new().set("force", false).set("interactive", true);
        let cmd = remove(&["x"], &opts).unwrap();
        assert_eq!(cmd.args, ["-i", "--", "x"]);
    }

    #[test]
    fn test_remove_requires_paths() {
        let err = remove::<&str>(&[], &Options::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_remove_rejects_non_boolean_flag() {
        let opts = Options::new().set("recursive", "yes");
        let err = remove(&["x"], &opts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }
}
