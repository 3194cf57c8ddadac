//! Data models for colors, grid configurations and saved themes.
//!
//! This module contains the value types shared by the generator, the theme
//! library, the prompt adapter and every front-end. Models are independent
//! of UI and I/O.

pub mod grid_config;
pub mod hsl;
pub mod rgb;
pub mod theme;

// Re-export all model types
pub use grid_config::{ColumnMode, GridConfig, MAX_GRID_DIMENSION};
pub use hsl::HslColor;
pub use rgb::{Contrast, RgbColor};
pub use theme::{SavedTheme, ThemeSuggestion};
