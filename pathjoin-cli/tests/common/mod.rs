//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary working directory
//! - Command builder helpers for common patterns

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running inside the temporary directory.
    ///
    /// `PATHJOIN_LOG_MODE` is cleared so the caller's environment cannot
    /// change the verbosity under test.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathjoin").expect("Failed to find pathjoin binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("PATHJOIN_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Get the temp path as a UTF-8 string.
    pub fn path_str(&self) -> &str {
        self.temp_path.to_str().expect("Temp path is not UTF-8")
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Run a command and return its trimmed stdout, asserting success.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run pathjoin");

        assert!(
            output.status.success(),
            "pathjoin {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end_matches('\n')
            .to_string()
    }
}
