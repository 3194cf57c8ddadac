//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and on-disk locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "HueGrid";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "HueGrid";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "HUEGRID_CONFIG_DIR";

/// Well-known file name of the saved theme library.
pub const LIBRARY_FILE_NAME: &str = "saved_themes.json";

/// Heading shown when the current palette has no name.
pub const UNTITLED_THEME_NAME: &str = "Custom Palette";
