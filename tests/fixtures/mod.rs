//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use huegrid::models::{ColumnMode, GridConfig};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variable name that is never set during tests.
pub const UNSET_KEY_VAR: &str = "HUEGRID_TEST_API_KEY_NEVER_SET";

/// Path to the huegrid binary
pub fn huegrid_bin() -> &'static str {
    env!("CARGO_BIN_EXE_huegrid")
}

/// Creates a fresh, empty config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Creates a Command isolated to the given config directory.
///
/// The API key variable is pointed at an unset name unless a test
/// overrides it through `config set --api-key-env`.
pub fn huegrid_command(config_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(huegrid_bin());
    cmd.env("HUEGRID_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs huegrid in an isolated config directory and returns its output.
pub fn run_huegrid(config_dir: &Path, args: &[&str]) -> Output {
    huegrid_command(config_dir, args)
        .output()
        .expect("Failed to execute huegrid")
}

/// Asserts an exit code, printing stderr on mismatch.
pub fn assert_exit_code(output: &Output, expected: i32) {
    assert_eq!(
        output.status.code(),
        Some(expected),
        "unexpected exit code. stdout: {} stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

/// A small deterministic configuration: 3 rows, 4 columns, lightness mode.
pub fn test_config() -> GridConfig {
    GridConfig {
        base_hue: 200.0,
        base_sat: 70.0,
        base_light: 50.0,
        hue_step: 15.0,
        sat_step: 10.0,
        light_step: 8.0,
        rows: 3,
        cols: 4,
        column_mode: ColumnMode::Lightness,
    }
}
