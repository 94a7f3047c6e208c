//! # Folio CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command runs
//! inside a `Sandbox`: a temporary directory used as the working directory, the
//! user config directory (`FOLIO_CONFIG_DIR`) and the state directory
//! (`FOLIO_STATE_DIR`), so tests never read or write the real user's files.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Isolated working, config and state directories for one test.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create sandbox dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.folio.toml` in the sandbox working directory.
    pub fn write_project_config(&self, content: &str) {
        fs::write(self.path().join(".folio.toml"), content).expect("Failed to write .folio.toml");
    }

    /// Writes a file relative to the sandbox and returns its absolute path.
    pub fn write_file(&self, name: &str, content: &str) -> String {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write sandbox file");
        path.to_string_lossy().into_owned()
    }

    /// Writes the user-level `config.toml` under the sandbox config directory.
    pub fn write_user_config(&self, content: &str) {
        let dir = self.path().join("config");
        fs::create_dir_all(&dir).expect("Failed to create sandbox config dir");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config.toml");
    }

    /// A `folio` command confined to this sandbox.
    pub fn cmd(&self) -> Command {
        self.cmd_in(".")
    }

    /// Like `cmd`, but run from `subdir` inside the sandbox (created if needed).
    pub fn cmd_in(&self, subdir: &str) -> Command {
        let cwd = self.path().join(subdir);
        fs::create_dir_all(&cwd).expect("Failed to create sandbox subdir");
        let mut cmd = folio_cmd();
        cmd.current_dir(cwd)
            .env("FOLIO_CONFIG_DIR", self.path().join("config"))
            .env("FOLIO_STATE_DIR", self.path().join("state"))
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Command pointing at the compiled `folio` binary.
pub fn folio_cmd() -> Command {
    Command::cargo_bin("folio").expect("Failed to find folio binary for testing")
}
