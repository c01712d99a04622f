//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the duck-attire binary.
pub fn duck_attire_bin() -> &'static str {
    env!("CARGO_BIN_EXE_duck-attire")
}

/// Creates an empty config directory for one test.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Creates a Command whose configuration lives in `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(duck_attire_bin());
    cmd.env("DUCK_ATTIRE_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with a fresh config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = temp_config_dir();
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON, failing the test with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}). stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Stdout as a lossy string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a lossy string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
