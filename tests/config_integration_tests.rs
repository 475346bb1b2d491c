//! Integration tests for configuration loading.

mod common;

use common::{COMPLIANT_COMPONENT, RAW_BUTTON_COMPONENT, TestFixture};
use predicates::prelude::*;

#[test]
fn config_root_is_used_when_no_argument_given() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nroot = \"web\"\n");
    fixture.create_file("web/Panel.tsx", COMPLIANT_COMPONENT);

    stng_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("web/Panel.tsx"));
}

#[test]
fn cli_root_overrides_config_root() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nroot = \"missing\"\n");
    fixture.create_component("Panel.tsx", COMPLIANT_COMPONENT);

    stng_guard!()
        .current_dir(fixture.path())
        .args(["check", "src", "--color", "never"])
        .assert()
        .success();
}

#[test]
fn config_exclude_and_cli_exclude_accumulate() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nexclude = [\"**/legacy/**\"]\n");
    fixture.create_component("legacy/Old.tsx", RAW_BUTTON_COMPONENT);
    fixture.create_component("vendor/Lib.tsx", RAW_BUTTON_COMPONENT);
    fixture.create_component("Panel.tsx", COMPLIANT_COMPONENT);

    stng_guard!()
        .current_dir(fixture.path())
        .args(["check", "-x", "**/vendor/**", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files checked: 1"));
}

#[test]
fn config_fail_on_unreadable() {
    let fixture = TestFixture::new();
    fixture.create_config("[check]\nfail_on_unreadable = true\n");
    fixture.create_dir("src");
    std::fs::write(fixture.path().join("src/Broken.tsx"), [0xff, 0xfe, 0x80]).unwrap();

    stng_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(1);
}

#[test]
fn no_config_flag_ignores_config_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nroot = \"missing\"\n");
    fixture.create_component("Panel.tsx", COMPLIANT_COMPONENT);

    stng_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never"])
        .assert()
        .success();
}

#[test]
fn explicit_config_path() {
    let fixture = TestFixture::new();
    fixture.create_file("conf/guard.toml", "[scanner]\nextensions = [\"jsx\"]\n");
    fixture.create_component("Legacy.tsx", RAW_BUTTON_COMPONENT);
    fixture.create_component("Panel.jsx", COMPLIANT_COMPONENT);

    stng_guard!()
        .current_dir(fixture.path())
        .args(["check", "--config", "conf/guard.toml", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files checked: 1"));
}

#[test]
fn missing_explicit_config_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_component("Panel.tsx", COMPLIANT_COMPONENT);

    stng_guard!()
        .current_dir(fixture.path())
        .args(["check", "--config", "nope.toml", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_toml_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner\nroot = ");
    fixture.create_component("Panel.tsx", COMPLIANT_COMPONENT);

    stng_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_config_key_is_rejected() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nforbidden_patterns = []\n");
    fixture.create_component("Panel.tsx", COMPLIANT_COMPONENT);

    stng_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(2);
}

#[test]
fn dotted_extension_is_rejected() {
    let fixture = TestFixture::new();
    fixture.create_config("[scanner]\nextensions = [\".tsx\"]\n");
    fixture.create_component("Panel.tsx", COMPLIANT_COMPONENT);

    stng_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid extension"));
}

#[test]
fn invalid_exclude_glob_is_rejected() {
    let fixture = TestFixture::new();
    fixture.create_component("Panel.tsx", COMPLIANT_COMPONENT);

    stng_guard!()
        .current_dir(fixture.path())
        .args(["check", "-x", "[unclosed", "--color", "never"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid glob pattern"));
}
