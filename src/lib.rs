//! argvkit - Validated, injection-safe argument vectors for command-line tools
//!
//! argvkit turns a structured options map into the exact `argv` a tool
//! expects, validating every value on the way in. It never spawns anything:
//! the result is a [`CommandSpec`] (program plus discrete arguments) for the
//! host to execute however it likes.
//!
//! # Quick Start
//!
//! ```rust
//! use argvkit::tools::cp::{copy, CopyOptions};
//!
//! # fn main() -> argvkit::Result<()> {
//! let opts = CopyOptions { recursive: true, verbose: true, ..Default::default() };
//! let cmd = copy(&["a", "b"], "dst", &opts.to_options())?;
//!
//! assert_eq!(cmd.program, "cp");
//! assert_eq!(cmd.args, ["-r", "-v", "--", "a", "b", "dst"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Building argv for other tools
//!
//! [`ArgBuilder`] is the engine behind every wrapper. Operations are
//! chainable, no-ops for absent keys, and fail fast; nothing reaches the
//! target vector unless the whole build succeeds.
//!
//! ```rust
//! use argvkit::{ArgBuilder, CommandSpec, Options, RepeatConfig};
//!
//! # fn main() -> argvkit::Result<()> {
//! let opts = Options::new().set("all", true).set("output", vec!["pid", "comm"]);
//! let mut args = Vec::new();
//!
//! let mut b = ArgBuilder::new(&mut args, &opts);
//! b.flag("all", "-e")?.repeatable("output", "-o", RepeatConfig::default())?;
//! b.finish()?;
//!
//! let cmd = CommandSpec::from_parts("ps", args);
//! assert_eq!(cmd.to_string(), "ps -e -o pid -o comm");
//! # Ok(())
//! # }
//! ```
//!
//! # Stable Public API
//!
//! - [`Options`], [`OptionValue`], [`Scalar`] - the options model
//! - [`ArgBuilder`] and its config types - argv construction
//! - [`CommandSpec`] and [`PrefixStack`] - command descriptors
//! - [`ArgvConfig`] and [`Toolbox`] - program overrides
//! - [`ArgvError`] - library error type
//! - [`tools`] - per-tool wrappers

pub mod logging;

pub use argvkit_builder::{
    ArgBuilder, Check, CountConfig, END_OF_OPTIONS, MapConfig, RepeatConfig, ValueConfig,
    ValueMode,
};
pub use argvkit_command::{CommandSpec, PrefixStack};
pub use argvkit_config::{ArgvConfig, ConfigBuilder};
pub use argvkit_error::{
    ArgvError, ConfigError, ErrorCategory, ErrorKind, Result, UserFriendlyError,
};
pub use argvkit_options::{
    FlagOrValue, OneOrMany, OptionValue, Options, Scalar, as_scalars, csv_join, sorted_entries,
    to_list,
};
pub use argvkit_tools::Toolbox;

/// Value rules and executable resolution.
pub mod validation {
    pub use argvkit_validation::*;
}

/// Per-tool wrappers.
pub mod tools {
    pub use argvkit_tools::{cp, fd, jq, ping, pip, rg, rm, tar, xclip};
}
