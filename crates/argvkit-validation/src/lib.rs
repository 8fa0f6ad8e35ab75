//! Input validation for argvkit
//!
//! Pure value rules (non-empty, flag-injection guard, numeric ranges) and
//! executable resolution against an injectable [`Environment`].

mod binary;
mod rules;

pub use binary::{Environment, SystemEnvironment, bin, is_path_like};
pub use rules::{
    NumberRule, Rule, integer, integer_min, integer_non_negative, non_empty_str,
    non_empty_string, not_flag, not_flag_str, number_min, number_non_negative, one_of,
};
