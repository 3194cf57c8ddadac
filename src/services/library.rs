//! Saved theme library.
//!
//! The library is an ordered sequence of [`SavedTheme`] records, newest
//! first, persisted as a JSON array in a single well-known file. Front-ends
//! talk to it through the [`ThemeLibraryStore`] trait; the palette core never
//! touches it.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::models::{GridConfig, SavedTheme};

/// Durable keyed storage of named configurations.
pub trait ThemeLibraryStore: Send {
    /// Returns all saved themes, newest first.
    fn list(&self) -> Result<Vec<SavedTheme>>;

    /// Saves a new theme and returns it with its generated id and timestamp.
    fn save(&mut self, name: &str, description: &str, config: GridConfig) -> Result<SavedTheme>;

    /// Removes the theme with the given id. Removing an unknown id is a no-op.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Looks up a theme by id.
    fn get(&self, id: &str) -> Result<Option<SavedTheme>> {
        Ok(self.list()?.into_iter().find(|theme| theme.id == id))
    }
}

/// Theme library backed by a JSON file.
///
/// Every mutation rewrites the whole file through a temp file + rename so a
/// crash never leaves a half-written library behind.
#[derive(Debug, Clone)]
pub struct JsonThemeLibrary {
    path: PathBuf,
}

impl JsonThemeLibrary {
    /// Creates a library stored at `path`. The file is created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the library location named by the application configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.library.resolved_path()?))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<SavedTheme>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).context(format!(
            "Failed to read theme library: {}",
            self.path.display()
        ))?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).context(format!(
            "Failed to parse theme library: {}",
            self.path.display()
        ))
    }

    fn write_all(&self, themes: &[SavedTheme]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context(format!(
                "Failed to create library directory: {}",
                parent.display()
            ))?;
        }

        let content =
            serde_json::to_string_pretty(themes).context("Failed to serialize theme library")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp library file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp library file to: {}",
            self.path.display()
        ))?;

        Ok(())
    }
}

impl ThemeLibraryStore for JsonThemeLibrary {
    fn list(&self) -> Result<Vec<SavedTheme>> {
        self.read_all()
    }

    fn save(&mut self, name: &str, description: &str, config: GridConfig) -> Result<SavedTheme> {
        let mut themes = self.read_all()?;

        let theme = SavedTheme {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            config,
            created_at: Utc::now().timestamp_millis(),
        };

        themes.insert(0, theme.clone());
        self.write_all(&themes)?;

        debug!(id = %theme.id, name = %theme.name, "Saved theme");
        Ok(theme)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let mut themes = self.read_all()?;
        let before = themes.len();
        themes.retain(|theme| theme.id != id);

        if themes.len() == before {
            debug!(id, "Theme not found, nothing to delete");
            return Ok(());
        }

        self.write_all(&themes)?;
        debug!(id, "Deleted theme");
        Ok(())
    }
}
