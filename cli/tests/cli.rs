use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn strips_default_delimiters_from_stdin() {
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.write_stdin("A\n%#{\nsecret\n%#}\nB\n");
    cmd.assert().success().stdout("A\nB\n");
}

#[test]
fn passes_plain_text_through_unchanged() {
    let input = "fn main() {}\n# heading\n100% done\n";
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.write_stdin(input);
    cmd.assert().success().stdout(input);
}

#[test]
fn no_trailing_newline_is_added() {
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.write_stdin("tail%#{x%#}");
    cmd.assert().success().stdout("tail");
}

#[test]
fn custom_delimiters() {
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.args(["-o", r"%\[", "-c", r"%\]"])
        .write_stdin("x\n%[\nhidden\n%]\ny %#{ kept %}\n");
    cmd.assert().success().stdout("x\ny %#{ kept %}\n");
}

#[test]
fn literal_brace_delimiters_match_defaults() {
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.args(["-o", "%#{", "-c", "%#}"])
        .write_stdin("%#{x%#}y\nkeep\n");
    cmd.assert().success().stdout("y\nkeep\n");
}

#[test]
fn ifdef_kept_when_defined() {
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.args(["--define", "FOO"])
        .write_stdin("%#ifdef FOO\nX\n%#endif\n");
    cmd.assert().success().stdout("X\n");
}

#[test]
fn ifdef_dropped_when_undefined() {
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.write_stdin("%#ifdef FOO\nX\n%#endif\n");
    cmd.assert().success().stdout("");
}

#[test]
fn ifndef_follows_defines() {
    let input = "%#ifndef BAR\nY\n%#endif\n";

    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.write_stdin(input);
    cmd.assert().success().stdout("Y\n");

    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.args(["-D", "BAR"]).write_stdin(input);
    cmd.assert().success().stdout("");
}

#[test]
fn several_defines_in_one_flag() {
    let input = "%#ifdef A\na\n%#endif\n%#ifdef B\nb\n%#endif\n%#ifdef C\nc\n%#endif\n";
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.args(["-D", "A,B"]).write_stdin(input);
    cmd.assert().success().stdout("a\nb\n");
}

#[test]
fn define_does_not_swallow_subcommand() {
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.args(["-D", "A", "completion", "bash"])
        .write_stdin("plain input\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("strip-delimited"))
        .stdout(predicate::str::contains("plain input").not());
}

#[test]
fn reads_piped_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "keep\n%#{{\ndrop\n%#}}\n%#ifndef X\nalso keep\n%#endif\n").unwrap();

    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.pipe_stdin(file.path()).unwrap();
    cmd.assert().success().stdout("keep\nalso keep\n");
}

#[test]
fn invalid_pattern_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.args(["--open", "("]).write_stdin("text");
    cmd.assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.arg("--nope");
    cmd.assert().failure().code(2);
}

#[test]
fn non_utf8_input_fails() {
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.write_stdin(vec![0xffu8, 0xfe, b'\n']);
    cmd.assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn logs_go_to_stderr() {
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.env_remove("RUST_LOG")
        .args(["--log-level", "info"])
        .write_stdin("a%#{b%#}c");
    cmd.assert()
        .success()
        .stdout("ac")
        .stderr(predicate::str::contains("filtered"));
}

#[test]
fn completion_script() {
    let mut cmd = cargo_bin_cmd!("strip-delimited");
    cmd.args(["completion", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("strip-delimited"));
}
