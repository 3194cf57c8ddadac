//! End-to-end tests for `huegrid theme` commands.

mod fixtures;
use fixtures::*;

use std::path::Path;

fn save_theme(config_dir: &Path, name: &str, extra: &[&str]) -> String {
    let mut args = vec!["theme", "save", "--name", name, "--json"];
    args.extend_from_slice(extra);
    let output = run_huegrid(config_dir, &args);
    assert_exit_code(&output, 0);
    stdout_json(&output)["id"]
        .as_str()
        .expect("saved theme should have an id")
        .to_string()
}

#[test]
fn test_list_empty_library() {
    let config_dir = temp_config_dir();

    let output = run_huegrid(config_dir.path(), &["theme", "list"]);
    assert_exit_code(&output, 0);
    assert!(String::from_utf8_lossy(&output.stdout).contains("No saved themes."));

    let output = run_huegrid(config_dir.path(), &["theme", "list", "--json"]);
    assert_exit_code(&output, 0);
    assert_eq!(stdout_json(&output), serde_json::json!([]));
}

#[test]
fn test_save_writes_library_file() {
    let config_dir = temp_config_dir();
    let output = run_huegrid(
        config_dir.path(),
        &[
            "theme", "save", "--name", "  Dusk  ", "--description", "warm fade", "--hue-step",
            "-12", "--mode", "saturation", "--json",
        ],
    );
    assert_exit_code(&output, 0);

    let theme = stdout_json(&output);
    assert_eq!(theme["name"], "Dusk");
    assert_eq!(theme["description"], "warm fade");
    assert_eq!(theme["config"]["hueStep"], -12.0);
    assert_eq!(theme["config"]["columnMode"], "saturation");
    assert!(theme["createdAt"].as_i64().unwrap() > 0);

    let library = config_dir.path().join("saved_themes.json");
    assert!(library.exists(), "library file should be created");
    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(library).unwrap()).unwrap();
    assert_eq!(stored[0]["id"], theme["id"]);
}

#[test]
fn test_list_is_newest_first() {
    let config_dir = temp_config_dir();
    let first = save_theme(config_dir.path(), "First", &[]);
    let second = save_theme(config_dir.path(), "Second", &[]);

    let output = run_huegrid(config_dir.path(), &["theme", "list", "--json"]);
    assert_exit_code(&output, 0);
    let themes = stdout_json(&output);
    assert_eq!(themes.as_array().map(Vec::len), Some(2));
    assert_eq!(themes[0]["id"], second.as_str());
    assert_eq!(themes[1]["id"], first.as_str());

    let output = run_huegrid(config_dir.path(), &["theme", "list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let second_pos = stdout.find("Second").unwrap();
    let first_pos = stdout.find("First").unwrap();
    assert!(second_pos < first_pos);
}

#[test]
fn test_duplicate_names_are_allowed() {
    let config_dir = temp_config_dir();
    let a = save_theme(config_dir.path(), "Same", &[]);
    let b = save_theme(config_dir.path(), "Same", &[]);
    assert_ne!(a, b);
}

#[test]
fn test_show_theme() {
    let config_dir = temp_config_dir();
    let id = save_theme(config_dir.path(), "Forest", &["--base-hue", "120"]);

    let output = run_huegrid(config_dir.path(), &["theme", "show", &id, "--json"]);
    assert_exit_code(&output, 0);
    let theme = stdout_json(&output);
    assert_eq!(theme["name"], "Forest");
    assert_eq!(theme["config"]["baseHue"], 120.0);

    let output = run_huegrid(config_dir.path(), &["theme", "show", &id]);
    assert_exit_code(&output, 0);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Forest"));
    assert!(stdout.contains("Base Hue:    120°"));
}

#[test]
fn test_show_missing_theme() {
    let config_dir = temp_config_dir();
    let output = run_huegrid(config_dir.path(), &["theme", "show", "missing"]);
    assert_exit_code(&output, 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Theme not found"));
}

#[test]
fn test_delete_theme() {
    let config_dir = temp_config_dir();
    let keep = save_theme(config_dir.path(), "Keep", &[]);
    let drop = save_theme(config_dir.path(), "Drop", &[]);

    let output = run_huegrid(config_dir.path(), &["theme", "delete", &drop]);
    assert_exit_code(&output, 0);

    let output = run_huegrid(config_dir.path(), &["theme", "list", "--json"]);
    let themes = stdout_json(&output);
    assert_eq!(themes.as_array().map(Vec::len), Some(1));
    assert_eq!(themes[0]["id"], keep.as_str());
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let config_dir = temp_config_dir();
    save_theme(config_dir.path(), "Only", &[]);

    let output = run_huegrid(config_dir.path(), &["theme", "delete", "not-an-id"]);
    assert_exit_code(&output, 0);

    let output = run_huegrid(config_dir.path(), &["theme", "list", "--json"]);
    assert_eq!(stdout_json(&output).as_array().map(Vec::len), Some(1));
}

#[test]
fn test_save_empty_name_rejected() {
    let config_dir = temp_config_dir();
    let output = run_huegrid(config_dir.path(), &["theme", "save", "--name", "   "]);
    assert_exit_code(&output, 1);
    assert!(!config_dir.path().join("saved_themes.json").exists());
}

#[test]
fn test_save_oversized_grid_rejected() {
    let config_dir = temp_config_dir();
    let output = run_huegrid(
        config_dir.path(),
        &["theme", "save", "--name", "Huge", "--cols", "100000"],
    );
    assert_exit_code(&output, 1);
    assert!(!config_dir.path().join("saved_themes.json").exists());
}

#[test]
fn test_corrupt_library_is_io_error() {
    let config_dir = temp_config_dir();
    std::fs::write(config_dir.path().join("saved_themes.json"), "{not json").unwrap();

    let output = run_huegrid(config_dir.path(), &["theme", "list"]);
    assert_exit_code(&output, 2);
}
