//! Flag-injection and shell-injection guards.
//!
//! Values reach tools as discrete argv elements, so shell metacharacters are
//! inert. The remaining risk is a value the tool parses as an option; those
//! are either rejected or placed after the `--` marker.

use argvkit::tools::{cp, fd, ping, rg, tar, xclip};
use argvkit::{CommandSpec, END_OF_OPTIONS, ErrorKind, Options};

#[test]
fn test_flag_shaped_pattern_is_rejected() {
    let err = fd::find::<&str>("-rf", &[], &Options::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.to_string().contains("pattern"));
}

#[test]
fn test_flag_shaped_host_is_rejected() {
    for host in ["-f", "--flood", "-"] {
        let err = ping::ping(host, &Options::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{host}");
    }
}

#[test]
fn test_flag_shaped_option_values_are_rejected() {
    let opts = Options::new().set("file", "--use-compress-program=sh");
    assert_eq!(tar::list(&opts).unwrap_err().kind(), ErrorKind::InvalidArgument);

    let opts = Options::new().set("display", "-version");
    assert_eq!(xclip::paste(&opts).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_dash_prefixed_operands_follow_the_marker() {
    let cmd = cp::copy(&["--help", "-rf"], "-dst", &Options::new()).unwrap();
    let marker = cmd
        .args
        .iter()
        .position(|arg| arg == END_OF_OPTIONS)
        .unwrap();
    assert_eq!(cmd.args[marker + 1..], ["--help", "-rf", "-dst"]);

    let cmd = rg::search::<&str>("--files", &[], &Options::new()).unwrap();
    assert_eq!(cmd.args, ["--", "--files"]);
}

#[test]
fn test_shell_metacharacters_stay_single_arguments() {
    let payloads = ["hello; rm -rf /", "$(whoami)", "`ls`", "foo | bar", "a && b"];
    let cmd = rg::search(payloads[0], &payloads[1..], &Options::new()).unwrap();

    assert_eq!(cmd.args.len(), payloads.len() + 1);
    assert_eq!(cmd.args[1..], payloads);

    let std_cmd = cmd.to_command();
    let args: Vec<_> = std_cmd.get_args().collect();
    assert_eq!(args.len(), payloads.len() + 1);
    assert_eq!(args[1], "hello; rm -rf /");
}

#[test]
fn test_extra_passthrough_is_verbatim() {
    let opts = Options::new().set("extra", vec!["--exec", "sh"]);
    let cmd = fd::find::<&str>("x", &[], &opts).unwrap();
    assert_eq!(cmd.args, ["--exec", "sh", "x"]);
}

#[test]
fn test_command_spec_preserves_metacharacters() {
    let cmd = CommandSpec::new("echo").args(["a b", "c;d", "$HOME"]);
    assert_eq!(cmd.argv(), ["echo", "a b", "c;d", "$HOME"]);
}
