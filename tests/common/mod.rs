//! Shared testing utilities for medipost CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated `MEDIPOST_HOME` for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    /// Absolute path to the emulated medipost home directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `medipost` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("medipost").expect("Failed to locate medipost binary");
        cmd.env("MEDIPOST_HOME", self.home()).env("HOME", self.home());
        cmd
    }

    /// Write a state file under the emulated home, creating parents.
    pub fn write_state_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.home().join(relative);
        fs::create_dir_all(path.parent().expect("state file parent")).expect("create state dir");
        fs::write(&path, content).expect("write state file");
        path
    }
}
