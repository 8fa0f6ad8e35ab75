//! Scoped argv prefixes
//!
//! A prefix is a launcher that runs the wrapped command itself, such as
//! `sudo -n`, `nice -n 10` or `wsl --exec`. Prefixes nest: the first one
//! pushed is the outermost.

use argvkit_error::{ArgvError, Result};
use argvkit_validation::non_empty_str;
use tracing::debug;

use crate::CommandSpec;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixStack {
    layers: Vec<Vec<String>>,
}

impl PrefixStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an innermost prefix. Empty prefixes and empty tokens are rejected.
    pub fn push<I, S>(&mut self, prefix: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let layer: Vec<String> = prefix.into_iter().map(Into::into).collect();
        if layer.is_empty() {
            return Err(ArgvError::invalid("prefix", "must contain at least one token"));
        }
        for token in &layer {
            non_empty_str(token, "prefix")?;
        }
        self.layers.push(layer);
        Ok(self)
    }

    /// Remove and return the innermost prefix.
    pub fn pop(&mut self) -> Option<Vec<String>> {
        self.layers.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Run `body` with `prefix` pushed, popping it again afterwards whether
    /// or not `body` succeeds.
    ///
    /// ```rust
    /// use argvkit_command::{CommandSpec, PrefixStack};
    ///
    /// # fn main() -> argvkit_error::Result<()> {
    /// let mut stack = PrefixStack::new();
    /// let cmd = stack.scoped(["sudo", "-n"], |s| {
    ///     Ok(s.apply(CommandSpec::new("rm").args(["--", "/tmp/x"])))
    /// })?;
    ///
    /// assert_eq!(cmd.argv(), ["sudo", "-n", "rm", "--", "/tmp/x"]);
    /// assert!(stack.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn scoped<I, S, T, F>(&mut self, prefix: I, body: F) -> Result<T>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.push(prefix)?;
        let depth = self.layers.len();
        let result = body(self);
        // The body may have pushed layers of its own; unwind to our depth.
        self.layers.truncate(depth - 1);
        result
    }

    /// Wrap `cmd` in every prefix, outermost first.
    ///
    /// The first token of the outermost prefix becomes the program; an empty
    /// stack returns `cmd` unchanged.
    #[must_use]
    pub fn apply(&self, cmd: CommandSpec) -> CommandSpec {
        let mut tokens = self.layers.iter().flatten().cloned();
        let Some(program) = tokens.next() else {
            return cmd;
        };
        let mut args: Vec<String> = tokens.collect();
        args.reserve(cmd.args.len() + 1);
        args.push(cmd.program);
        args.extend(cmd.args);
        debug!(program = %program, layers = self.layers.len(), "Applied argv prefixes");
        CommandSpec::from_parts(program, args)
    }
}
