//! End-to-end tests for `huegrid config` commands.

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let config_dir = temp_config_dir();
    let output = run_huegrid(config_dir.path(), &["config", "show"]);
    assert_exit_code(&output, 0);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("HueGrid Configuration"));
    assert!(stdout.contains("gemini-2.5-flash"));
    assert!(stdout.contains("saved_themes.json"));
}

#[test]
fn test_config_show_json_schema() {
    let config_dir = temp_config_dir();
    let output = run_huegrid(config_dir.path(), &["config", "show", "--json"]);
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    assert!(result["library"]["path"].as_str().unwrap().ends_with("saved_themes.json"));
    assert_eq!(result["generator"]["model"], "gemini-2.5-flash");
    assert_eq!(result["generator"]["api_key_env"], "GEMINI_API_KEY");
    assert!(result["generator"]["api_key_set"].is_boolean());
    assert!(result["generator"]["temperature"].is_number());
    assert_eq!(result["ui"]["theme"], "auto");
    assert_eq!(result["ui"]["start_with_random"], true);
}

#[test]
fn test_config_show_never_prints_key() {
    let config_dir = temp_config_dir();
    let secret = "sk-test-secret-value";
    let output = huegrid_command(config_dir.path(), &["config", "show", "--json"])
        .env("GEMINI_API_KEY", secret)
        .output()
        .expect("Failed to execute huegrid");
    assert_exit_code(&output, 0);

    assert!(!String::from_utf8_lossy(&output.stdout).contains(secret));
    assert_eq!(stdout_json(&output)["generator"]["api_key_set"], true);
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_persists() {
    let config_dir = temp_config_dir();
    let output = run_huegrid(
        config_dir.path(),
        &[
            "config", "set", "--model", "gemini-test", "--temperature", "1.2", "--theme-mode",
            "dark",
        ],
    );
    assert_exit_code(&output, 0);
    assert!(config_dir.path().join("config.toml").exists());

    let output = run_huegrid(config_dir.path(), &["config", "show", "--json"]);
    let result = stdout_json(&output);
    assert_eq!(result["generator"]["model"], "gemini-test");
    assert_eq!(result["ui"]["theme"], "dark");
    let temperature = result["generator"]["temperature"].as_f64().unwrap();
    assert!((temperature - 1.2).abs() < 1e-6);
}

#[test]
fn test_config_set_library_path() {
    let config_dir = temp_config_dir();
    let library = config_dir.path().join("elsewhere").join("themes.json");
    let library_str = library.to_str().unwrap();

    let output = run_huegrid(config_dir.path(), &["config", "set", "--library-path", library_str]);
    assert_exit_code(&output, 0);

    let output = run_huegrid(config_dir.path(), &["theme", "save", "--name", "Moved"]);
    assert_exit_code(&output, 0);
    assert!(library.exists(), "theme should be saved at the configured path");
}

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = temp_config_dir();
    let output = run_huegrid(config_dir.path(), &["config", "set"]);
    assert_exit_code(&output, 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("At least one"));
}

#[test]
fn test_config_set_invalid_temperature() {
    let config_dir = temp_config_dir();
    let output = run_huegrid(config_dir.path(), &["config", "set", "--temperature", "3.5"]);
    assert_exit_code(&output, 1);
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_invalid_theme_mode() {
    let config_dir = temp_config_dir();
    let output = run_huegrid(config_dir.path(), &["config", "set", "--theme-mode", "sepia"]);
    assert_exit_code(&output, 1);
}

#[test]
fn test_config_set_invalid_endpoint() {
    let config_dir = temp_config_dir();
    let output = run_huegrid(config_dir.path(), &["config", "set", "--endpoint", "ftp://x"]);
    assert_exit_code(&output, 1);
}

#[test]
fn test_corrupt_config_is_validation_error() {
    let config_dir = temp_config_dir();
    std::fs::write(config_dir.path().join("config.toml"), "[generator\nmodel=").unwrap();

    let output = run_huegrid(config_dir.path(), &["config", "show"]);
    assert_exit_code(&output, 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}
