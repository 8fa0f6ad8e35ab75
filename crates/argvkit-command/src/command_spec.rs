use serde::{Deserialize, Serialize};
use std::fmt;
use std::process::Command;

/// A program reference and its argument vector.
///
/// Arguments are discrete elements, never a shell string, so no quoting or
/// shell evaluation is involved when the descriptor is executed. argvkit
/// only builds descriptors; running them is up to the host.
///
/// # Example
///
/// ```rust
/// use argvkit_command::CommandSpec;
///
/// let cmd = CommandSpec::new("tar")
///     .arg("-c")
///     .args(["-f", "out.tar", "--", "src"]);
///
/// assert_eq!(cmd.program, "tar");
/// assert_eq!(cmd.argv(), ["tar", "-c", "-f", "out.tar", "--", "src"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Program name or path, as handed to the execution sink
    pub program: String,
    /// Arguments as discrete elements (NOT shell strings)
    pub args: Vec<String>,
}

impl CommandSpec {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Descriptor from a program and an already-built argument vector.
    #[must_use]
    pub fn from_parts(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Same arguments, different program.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Program followed by the arguments, as one vector.
    #[must_use]
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.program.clone());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Convert into a `std::process::Command`.
    ///
    /// The command is only constructed, never spawned.
    ///
    /// ```rust,no_run
    /// use argvkit_command::CommandSpec;
    ///
    /// let cmd = CommandSpec::new("echo").arg("hello");
    /// let output = cmd.to_command().output().expect("failed to execute");
    /// ```
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

/// Debug rendering: tokens separated by spaces, each one that is empty or
/// contains whitespace or quotes shown in double quotes. Not shell syntax.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_token(f, &self.program)?;
        for arg in &self.args {
            f.write_str(" ")?;
            write_token(f, arg)?;
        }
        Ok(())
    }
}

fn write_token(f: &mut fmt::Formatter<'_>, token: &str) -> fmt::Result {
    let needs_quotes =
        token.is_empty() || token.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'');
    if needs_quotes {
        write!(f, "{token:?}")
    } else {
        f.write_str(token)
    }
}
