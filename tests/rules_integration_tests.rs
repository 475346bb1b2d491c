//! Integration tests for the `rules` command.

mod common;

use predicates::prelude::*;

#[test]
fn rules_lists_rule_tables() {
    stng_guard!()
        .args(["rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sanctioned package: stng-react"))
        .stdout(predicate::str::contains("raw-button"))
        .stdout(predicate::str::contains("inline-style"))
        .stdout(predicate::str::contains("Sanctioned components (27):"));
}

#[test]
fn rules_json_output() {
    let output = stng_guard!()
        .args(["rules", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["forbidden_patterns"].as_array().unwrap().len(), 7);
    assert_eq!(json["components"][0], "Button");
    assert_eq!(json["components"][26], "Tooltip");
}

#[test]
fn rules_rejects_unknown_format() {
    stng_guard!()
        .args(["rules", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}
