//! Prompt-to-theme generation command.

use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::cli::common::{load_config, open_library, print_config, print_json, CliError, CliResult};
use crate::models::{SavedTheme, ThemeSuggestion};
use crate::services::{GeminiAdapter, PromptToThemeAdapter, ThemeLibraryStore};

/// Generate a theme from a mood description
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Mood or concept to describe, e.g. "foggy harbor at dawn"
    prompt: String,

    /// Save the generated theme to the library
    #[arg(long)]
    save: bool,

    /// Use the model's numbers as-is instead of clamping them to control bounds
    #[arg(long)]
    raw: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    #[serde(flatten)]
    suggestion: &'a ThemeSuggestion,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved: Option<&'a SavedTheme>,
}

impl GenerateArgs {
    /// Execute generate command
    pub fn execute(&self) -> CliResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(CliError::validation("Prompt cannot be empty"));
        }

        let config = load_config()?;
        let adapter = GeminiAdapter::from_config(&config.generator)
            .map_err(|e| CliError::generation(e.to_string()))?;

        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| CliError::io(format!("Failed to start async runtime: {e}")))?;

        let suggestion = runtime
            .block_on(adapter.generate(&self.prompt))
            .map_err(|e| CliError::generation(format!("Theme generation failed: {e}")))?;

        let suggestion = if self.raw {
            suggestion
        } else {
            let sanitized = suggestion.clone().sanitized();
            if sanitized.config != suggestion.config {
                warn!("Model output was outside control bounds and has been clamped");
            }
            sanitized
        };

        let saved = if self.save {
            let theme = open_library()?
                .save(&suggestion.name, &suggestion.description, suggestion.config)
                .map_err(|e| CliError::io(format!("Theme library error: {e:#}")))?;
            Some(theme)
        } else {
            None
        };

        if self.json {
            return print_json(&GenerateOutput {
                suggestion: &suggestion,
                saved: saved.as_ref(),
            });
        }

        println!("{}", suggestion.name);
        println!("{}", suggestion.description);
        println!();
        print_config(&suggestion.config);
        if let Some(theme) = saved {
            println!();
            println!("Saved as {}", theme.id);
        }
        Ok(())
    }
}
