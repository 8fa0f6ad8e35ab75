//! Options model for argvkit builders
//!
//! An [`Options`] map is the structured input a builder turns into argv. Its
//! values come from a closed set of kinds ([`OptionValue`]): a boolean flag
//! indicator, a [`Scalar`], an ordered list of scalars, or a string-keyed
//! map of scalars. Per-tool option structs convert into this map; hosts that
//! hold options as JSON or TOML documents can deserialize it directly.

mod normalize;
mod options;
mod typed;
mod value;

pub use normalize::{as_scalars, csv_join, sorted_entries, to_list};
pub use options::Options;
pub use typed::{FlagOrValue, OneOrMany};
pub use value::{OptionValue, Scalar};
