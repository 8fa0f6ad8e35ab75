//! End-to-end builds through the public facade.

use anyhow::Result;
use argvkit::tools::{cp, jq, rm, tar};
use argvkit::{ArgvError, ErrorKind, Options, PrefixStack};
use std::collections::HashMap;

#[test]
fn test_cp_recursive_verbose() -> Result<()> {
    let opts = Options::new().set("recursive", true).set("verbose", true);
    let cmd = cp::copy(&["a", "b"], "dst", &opts)?;

    assert_eq!(cmd.program, "cp");
    assert_eq!(cmd.args, ["-r", "-v", "--", "a", "b", "dst"]);
    Ok(())
}

#[test]
fn test_jq_variables_are_sorted_before_the_filter() -> Result<()> {
    let opts = Options::new().set("args", HashMap::from([("z", "1"), ("a", "2")]));
    let cmd = jq::filter::<&str>(".x", &[], &opts)?;

    assert_eq!(cmd.program, "jq");
    assert!(
        cmd.args
            .ends_with(&["--arg", "a", "2", "--arg", "z", "1", "--", ".x"].map(String::from))
    );
    Ok(())
}

#[test]
fn test_rm_conflict_produces_no_command() {
    let opts = Options::new()
        .set("recursive", true)
        .set("force", true)
        .set("interactive", true);
    let err = rm::remove(&["x"], &opts).unwrap_err();

    assert_eq!(
        err,
        ArgvError::ConflictingOptions {
            label: "rm".to_string(),
            keys: vec!["force".to_string(), "interactive".to_string()],
        }
    );
}

#[test]
fn test_options_from_json_document() -> Result<()> {
    let opts: Options = serde_json::from_str(
        r#"{
            "file": "backup.tar.xz",
            "xz": true,
            "verbose": 2,
            "excludes": ["*.tmp", ".git"],
            "checkpoint": null
        }"#,
    )?;
    let cmd = tar::create(&["home"], &opts)?;

    assert_eq!(
        cmd.args,
        [
            "-c",
            "-J",
            "-v",
            "-v",
            "--exclude=*.tmp",
            "--exclude=.git",
            "-f",
            "backup.tar.xz",
            "--",
            "home"
        ]
    );
    Ok(())
}

#[test]
fn test_options_from_toml_document() -> Result<()> {
    let opts: Options = toml::from_str(
        r#"
recursive = true
preserve = ["mode", "ownership"]
extra = ["--reflink=auto"]
"#,
    )?;
    let cmd = cp::copy(&["src"], "dst", &opts)?;

    assert_eq!(
        cmd.args,
        [
            "-r",
            "--preserve=mode,ownership",
            "--reflink=auto",
            "--",
            "src",
            "dst"
        ]
    );
    Ok(())
}

#[test]
fn test_typed_options_from_json() -> Result<()> {
    let typed: cp::CopyOptions = serde_json::from_str(r#"{"archive": true, "update": true}"#)?;
    let cmd = cp::copy(&["a"], "b", &typed.to_options())?;
    assert_eq!(cmd.args, ["-a", "-u", "--", "a", "b"]);
    Ok(())
}

#[test]
fn test_wrong_value_kind_is_a_type_mismatch() {
    let opts: Options = serde_json::from_str(r#"{"excludes": {"a": "b"}}"#).unwrap();
    let err = tar::list(&opts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_prefix_stack_wraps_wrapper_output() -> Result<()> {
    let opts = Options::new().set("recursive", true);
    let cmd = cp::copy(&["a"], "b", &opts)?;

    let mut stack = PrefixStack::new();
    stack.push(["sudo", "-n"])?.push(["nice", "-n", "10"])?;
    let wrapped = stack.apply(cmd);

    assert_eq!(wrapped.program, "sudo");
    assert_eq!(
        wrapped.args,
        ["-n", "nice", "-n", "10", "cp", "-r", "--", "a", "b"]
    );
    Ok(())
}

#[test]
fn test_caller_options_are_not_modified() -> Result<()> {
    let opts = Options::new()
        .set("raw_output", true)
        .set("args", HashMap::from([("name", "value")]))
        .set("extra", vec!["--seq"]);
    let before = opts.clone();

    jq::filter(".", &["in.json"], &opts)?;
    let _ = rm::remove(&["x"], &opts);

    assert_eq!(opts, before);
    Ok(())
}
