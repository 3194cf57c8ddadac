//! Theme library management commands.

use clap::{Args, Subcommand};

use crate::cli::common::{open_library, print_config, print_json, CliError, CliResult, GridParamArgs};
use crate::models::{GridConfig, SavedTheme};
use crate::palette::random_config;
use crate::services::ThemeLibraryStore;

/// Manage the saved theme library
#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: ThemeCommand,
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    /// List saved themes, newest first
    List(ThemeListArgs),
    /// Show one saved theme
    Show(ThemeShowArgs),
    /// Save a configuration under a name
    Save(ThemeSaveArgs),
    /// Delete a saved theme
    Delete(ThemeDeleteArgs),
}

/// List saved themes
#[derive(Args, Debug)]
pub struct ThemeListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Show one saved theme
#[derive(Args, Debug)]
pub struct ThemeShowArgs {
    /// Theme ID
    id: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Save a configuration under a name
#[derive(Args, Debug)]
pub struct ThemeSaveArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Description
    #[arg(long, default_value = "")]
    description: String,

    #[command(flatten)]
    params: GridParamArgs,

    /// Start from a random configuration
    #[arg(long)]
    random: bool,

    /// Output the saved record as JSON
    #[arg(long)]
    json: bool,
}

/// Delete a saved theme
#[derive(Args, Debug)]
pub struct ThemeDeleteArgs {
    /// Theme ID
    id: String,
}

impl ThemeArgs {
    /// Execute theme subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ThemeCommand::List(args) => args.execute(),
            ThemeCommand::Show(args) => args.execute(),
            ThemeCommand::Save(args) => args.execute(),
            ThemeCommand::Delete(args) => args.execute(),
        }
    }
}

fn library_error(e: anyhow::Error) -> CliError {
    CliError::io(format!("Theme library error: {e:#}"))
}

impl ThemeListArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        let themes = open_library()?.list().map_err(library_error)?;

        if self.json {
            return print_json(&themes);
        }

        if themes.is_empty() {
            println!("No saved themes.");
            return Ok(());
        }

        for theme in &themes {
            println!("{}  {}  {}", theme.id, format_created(theme), theme.name);
        }
        Ok(())
    }
}

impl ThemeShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let theme = open_library()?
            .get(&self.id)
            .map_err(library_error)?
            .ok_or_else(|| CliError::validation(format!("Theme not found: {}", self.id)))?;

        if self.json {
            return print_json(&theme);
        }

        println!("{}", theme.name);
        if !theme.description.is_empty() {
            println!("{}", theme.description);
        }
        println!();
        println!("  ID:          {}", theme.id);
        println!("  Created:     {}", format_created(&theme));
        print_config(&theme.config);
        Ok(())
    }
}

impl ThemeSaveArgs {
    /// Execute save command
    pub fn execute(&self) -> CliResult<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CliError::validation("Theme name cannot be empty"));
        }

        let base = if self.random {
            random_config()
        } else {
            GridConfig::default()
        };
        let config = self.params.apply(base);
        config
            .check_size()
            .map_err(|e| CliError::validation(e.to_string()))?;

        let theme = open_library()?
            .save(name, self.description.trim(), config)
            .map_err(library_error)?;

        if self.json {
            print_json(&theme)?;
        } else {
            println!("Saved theme '{}' ({})", theme.name, theme.id);
        }
        Ok(())
    }
}

impl ThemeDeleteArgs {
    /// Execute delete command
    pub fn execute(&self) -> CliResult<()> {
        open_library()?.delete(&self.id).map_err(library_error)?;
        println!("Deleted theme {}", self.id);
        Ok(())
    }
}

fn format_created(theme: &SavedTheme) -> String {
    theme
        .created()
        .map_or_else(|| theme.created_at.to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}
