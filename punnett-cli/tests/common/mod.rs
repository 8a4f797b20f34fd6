#![allow(dead_code)]

use assert_cmd::Command;

/// Runs the punnett CLI with the given arguments and returns stdout.
/// Panics if the command fails.
pub fn run_punnett(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("punnett").unwrap();
    cmd.args(args);
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

/// Runs the punnett CLI expecting a failure and returns stderr.
pub fn run_punnett_failing(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("punnett").unwrap();
    cmd.args(args);
    let output = cmd.assert().failure().get_output().stderr.clone();
    String::from_utf8(output).unwrap()
}
