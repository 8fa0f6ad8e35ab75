//! Configuration for argvkit tool wrappers
//!
//! [`ArgvConfig`] maps tool names to replacement program references (for
//! example `tar = "/usr/local/bin/gtar"`) and decides whether produced
//! commands have their binary verified before they are returned.

mod builder;
mod model;
mod validation;

pub use builder::ConfigBuilder;
pub use model::ArgvConfig;
