//! Integration tests for the top-level command-line surface.

mod common;

use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    stng_guard!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("rules"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_flag() {
    stng_guard!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stng-guard"));
}

#[test]
fn missing_subcommand_fails() {
    stng_guard!().assert().failure();
}

#[test]
fn unknown_color_choice_fails() {
    stng_guard!()
        .args(["check", "--color", "rainbow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
