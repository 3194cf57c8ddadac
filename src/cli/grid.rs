//! Grid printing command.

use clap::{Args, ValueEnum};

use crate::cli::common::{open_library, print_json, CliError, CliResult, GridParamArgs};
use crate::models::GridConfig;
use crate::palette::{random_config, RenderedGrid};
use crate::services::ThemeLibraryStore;

/// Output format of the grid command.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GridFormat {
    /// Hex codes with the row hue
    #[default]
    Table,
    /// Configuration and cells as JSON
    Json,
    /// CSS custom properties
    Css,
    /// Bare hex codes, one row per line
    Hex,
}

/// Print the palette grid for a configuration
#[derive(Args, Debug)]
pub struct GridArgs {
    #[command(flatten)]
    params: GridParamArgs,

    /// Start from a saved theme instead of the default configuration
    #[arg(long, value_name = "ID", conflicts_with = "random")]
    theme: Option<String>,

    /// Start from a random configuration
    #[arg(long)]
    random: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = GridFormat::Table)]
    format: GridFormat,
}

#[derive(serde::Serialize)]
struct GridOutput<'a> {
    config: &'a GridConfig,
    #[serde(flatten)]
    grid: &'a RenderedGrid,
}

impl GridArgs {
    /// Execute grid command
    pub fn execute(&self) -> CliResult<()> {
        let base = if let Some(id) = &self.theme {
            let library = open_library()?;
            library
                .get(id)
                .map_err(|e| CliError::io(format!("Failed to read theme library: {e:#}")))?
                .ok_or_else(|| CliError::validation(format!("Theme not found: {id}")))?
                .config
        } else if self.random {
            random_config()
        } else {
            GridConfig::default()
        };

        let config = self.params.apply(base);
        config
            .check_size()
            .map_err(|e| CliError::validation(e.to_string()))?;
        let rendered = RenderedGrid::from_grid(&config.generate());

        match self.format {
            GridFormat::Json => print_json(&GridOutput {
                config: &config,
                grid: &rendered,
            })?,
            GridFormat::Css => println!("{}", rendered.to_css()),
            GridFormat::Hex => {
                for row in &rendered.cells {
                    let hexes: Vec<&str> = row.iter().map(|s| s.hex.as_str()).collect();
                    println!("{}", hexes.join(" "));
                }
            }
            GridFormat::Table => print_table(&config, &rendered),
        }

        Ok(())
    }
}

fn print_table(config: &GridConfig, rendered: &RenderedGrid) {
    println!(
        "{} x {} grid, columns vary {} ({:+}% per column)",
        rendered.rows,
        rendered.cols,
        config.column_mode,
        config.active_column_step()
    );
    println!();

    for row in &rendered.cells {
        let hue = row.first().map_or(String::from("-"), |s| format!("{}°", s.h));
        let hexes: Vec<&str> = row.iter().map(|s| s.hex.as_str()).collect();
        println!("{hue:>5}  {}", hexes.join(" "));
    }
}
