//! `jq`

use argvkit_builder::{Check, MapConfig};
use argvkit_command::CommandSpec;
use argvkit_error::Result;
use argvkit_options::Options;
use argvkit_validation::{NumberRule, non_empty_string, not_flag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::build_command;

pub const PROGRAM: &str = "jq";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub raw_output: bool,
    pub join_output: bool,
    pub compact: bool,
    pub slurp: bool,
    pub null_input: bool,
    pub exit_status: bool,
    pub sort_keys: bool,
    pub tab: bool,
    pub indent: Option<u8>,
    /// `--arg NAME VALUE` string variables
    pub args: BTreeMap<String, String>,
    /// `--argjson NAME JSON` variables
    pub json_args: BTreeMap<String, String>,
    pub extra: Vec<String>,
}

impl FilterOptions {
    #[must_use]
    pub fn to_options(&self) -> Options {
        let mut opts = Options::new()
            .set_flag("raw_output", self.raw_output)
            .set_flag("join_output", self.join_output)
            .set_flag("compact", self.compact)
            .set_flag("slurp", self.slurp)
            .set_flag("null_input", self.null_input)
            .set_flag("exit_status", self.exit_status)
            .set_flag("sort_keys", self.sort_keys)
            .set_flag("tab", self.tab)
            .set_opt("indent", self.indent)
            .set_list("extra", &self.extra);
        if !self.args.is_empty() {
            opts.insert("args", self.args.clone());
        }
        if !self.json_args.is_empty() {
            opts.insert("json_args", self.json_args.clone());
        }
        opts
    }
}

const VARIABLES: MapConfig = MapConfig {
    key_validate: Some(Check::Rule(not_flag)),
    value_validate: None,
};

const JSON_VARIABLES: MapConfig = MapConfig {
    key_validate: Some(Check::Rule(not_flag)),
    value_validate: Some(Check::Rule(non_empty_string)),
};

/// `jq [-r] [-j] [-c] [-s] [-n] [-e] [-S] [--tab|--indent N] [--arg K V]...
/// [--argjson K V]... [extra] -- FILTER [FILE...]`
///
/// Variables are emitted sorted by name.
pub fn filter<S: AsRef<str>>(filter: &str, files: &[S], options: &Options) -> Result<CommandSpec> {
    let mut operands = Vec::with_capacity(files.len() + 1);
    operands.push(filter);
    operands.extend(files.iter().map(AsRef::as_ref));

    build_command(PROGRAM, &[], options, |b| {
        b.mutually_exclusive(&["tab", "indent"], "jq indentation")?
            .flag("raw_output", "-r")?
            .flag("join_output", "-j")?
            .flag("compact", "-c")?
            .flag("slurp", "-s")?
            .flag("null_input", "-n")?
            .flag("exit_status", "-e")?
            .flag("sort_keys", "-S")?
            .flag("tab", "--tab")?
            .value_number("indent", "--indent", NumberRule::integer().non_negative())?
            .repeatable_map("args", "--arg", VARIABLES)?
            .repeatable_map("json_args", "--argjson", JSON_VARIABLES)?
            .extra()?
            .operands(&operands, "filter")?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argvkit_error::ErrorKind;
    use std::collections::HashMap;

    #[test]
    fn test_filter_variables_sorted() {
        let opts = Options::new()
            .set("raw_output", true)
            .set("args", HashMap::from([("z", "1"), ("a", "2")]));
        let cmd = filter(".x", &["data.json"], &opts).unwrap();
        assert_eq!(
            cmd.args,
            ["-r", "--arg", "a", "2", "--arg", "z", "1", "--", ".x", "data.json"]
        );
    }

    #[test]
    fn test_filter_typed_options() {
        let opts = FilterOptions {
            compact: true,
            indent: Some(4),
            json_args: BTreeMap::from([("limit".to_string(), "10".to_string())]),
            ..Default::default()
        };
        let cmd = filter::<&str>(".items[]", &[], &opts.to_options()).unwrap();
        assert_eq!(
            cmd.args,
            ["-c", "--indent", "4", "--argjson", "limit", "10", "--", ".items[]"]
        );
    }

    #[test]
    fn test_filter_tab_and_indent_conflict() {
        let opts = FilterOptions {
            tab: true,
            indent: Some(2),
            ..Default::default()
        };
        let err = filter::<&str>(".", &[], &opts.to_options()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConflictingOptions);
    }

    #[test]
    fn test_filter_indent_must_be_whole() {
        let opts = Options::new().set("indent", 1.5);
        let err = filter::<&str>(".", &[], &opts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_filter_rejects_flag_shaped_variable_names() {
        let opts = Options::new().set("args", HashMap::from([("--rawfile", "x")]));
        let err = filter::<&str>(".", &[], &opts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_filter_args_must_be_a_map() {
        let opts = Options::new().set("args", vec!["a", "b"]);
        let err = filter::<&str>(".", &[], &opts).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_filter_empty_filter_rejected() {
        let err = filter::<&str>("", &[], &Options::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
