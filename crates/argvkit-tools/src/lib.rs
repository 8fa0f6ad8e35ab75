//! Tool wrappers for argvkit
//!
//! One module per tool. Each declares a typed options struct that converts
//! into an [`Options`] map and functions that build a [`CommandSpec`] from
//! positionals plus that map. Flag order is fixed per wrapper.
//!
//! [`Toolbox`] applies an [`argvkit_config::ArgvConfig`] to produced
//! commands.

pub mod cp;
pub mod fd;
pub mod jq;
pub mod ping;
pub mod pip;
pub mod rg;
pub mod rm;
pub mod tar;
mod toolbox;
pub mod xclip;

pub use toolbox::Toolbox;

use argvkit_builder::ArgBuilder;
use argvkit_command::CommandSpec;
use argvkit_error::{ArgvError, Result};
use argvkit_options::Options;
use tracing::debug;

/// Build one command: seed the argv with `leading` tokens, run `body`
/// against a builder, and wrap the committed argv in a [`CommandSpec`].
pub(crate) fn build_command<F>(
    program: &str,
    leading: &[&str],
    options: &Options,
    body: F,
) -> Result<CommandSpec>
where
    F: FnOnce(&mut ArgBuilder<'_>) -> Result<()>,
{
    let mut args: Vec<String> = leading.iter().map(|token| (*token).to_string()).collect();
    let mut builder = ArgBuilder::new(&mut args, options);
    body(&mut builder)?;
    builder.finish()?;
    debug!(program = %program, argc = args.len(), "Built command");
    Ok(CommandSpec::from_parts(program, args))
}

/// Fail unless `values` holds at least one entry.
pub(crate) fn require<S>(values: &[S], label: &str) -> Result<()> {
    if values.is_empty() {
        return Err(ArgvError::invalid(label, "at least one value is required"));
    }
    Ok(())
}
