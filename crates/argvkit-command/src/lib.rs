//! Command descriptors for argvkit
//!
//! A [`CommandSpec`] is what every tool wrapper produces: a program
//! reference plus a discrete argument vector, ready to hand to an execution
//! sink. [`PrefixStack`] wraps descriptors in scoped argv prefixes such as
//! `sudo -n` or `nice -n 10`.

mod command_spec;
mod prefix;

pub use command_spec::CommandSpec;
pub use prefix::PrefixStack;
