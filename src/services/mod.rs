//! Service layer for I/O-bound collaborators.
//!
//! This module contains the theme library store and the prompt-to-theme
//! adapter. Both produce or consume `GridConfig` values; neither is used by
//! the palette core itself.

pub mod generator;
pub mod library;

// Re-export commonly used types
pub use generator::{GeminiAdapter, GenerationError, PromptToThemeAdapter};
pub use library::{JsonThemeLibrary, ThemeLibraryStore};
