//! # Folio CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Top-level behavior of the `folio` binary: standard flags, argument errors
//! and configuration failures.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    folio_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat").and(predicate::str::contains("classify")));
}

#[test]
fn test_version_flag() {
    folio_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_fails() {
    folio_cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_invalid_project_config_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config("[assistant]\nreply_delay_ms = 999999\n");

    sandbox
        .cmd()
        .args(["classify", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));
}

#[test]
fn test_missing_knowledge_file_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config("[assistant]\nknowledge_file = \"nope/knowledge.toml\"\n");

    sandbox
        .cmd()
        .args(["ask", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
