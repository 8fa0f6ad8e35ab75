//! Argument vector builder for argvkit
//!
//! [`ArgBuilder`] turns an [`argvkit_options::Options`] map into an ordered
//! list of argv tokens. Operations are chainable (`?` between calls), each
//! one is a no-op for an absent key, and the first failure aborts the build
//! without touching the caller's argv.

mod builder;
mod config;

pub use builder::{ArgBuilder, END_OF_OPTIONS};
pub use config::{Check, CountConfig, MapConfig, RepeatConfig, ValueConfig, ValueMode};
