//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Generator model name
    #[arg(long, value_name = "NAME")]
    model: Option<String>,

    /// Generator API base URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Environment variable holding the API key
    #[arg(long, value_name = "VAR")]
    api_key_env: Option<String>,

    /// Sampling temperature (0.0-2.0)
    #[arg(long, value_name = "T")]
    temperature: Option<f32>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme_mode: Option<String>,

    /// Theme library file
    #[arg(long, value_name = "FILE")]
    library_path: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    library: LibraryOutput,
    generator: GeneratorOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct LibraryOutput {
    path: String,
}

#[derive(Serialize, Debug)]
struct GeneratorOutput {
    endpoint: String,
    model: String,
    api_key_env: String,
    api_key_set: bool,
    temperature: f32,
    timeout_secs: u64,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    start_with_random: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let output = build_output(&config)?;

        if self.json {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {}", e))
            })?;
            println!("{}", json);
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.model.is_none()
            && self.endpoint.is_none()
            && self.api_key_env.is_none()
            && self.temperature.is_none()
            && self.theme_mode.is_none()
            && self.library_path.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --model, --endpoint, --api-key-env, --temperature, --theme-mode, or --library-path",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(model) = &self.model {
            config.generator.model.clone_from(model);
        }
        if let Some(endpoint) = &self.endpoint {
            config.generator.endpoint.clone_from(endpoint);
        }
        if let Some(var) = &self.api_key_env {
            config.generator.api_key_env.clone_from(var);
        }
        if let Some(temperature) = self.temperature {
            config.generator.temperature = temperature;
        }
        if let Some(theme_str) = &self.theme_mode {
            config.ui.theme_mode = theme_str
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(path) = &self.library_path {
            config.library.path = Some(path.clone());
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {}", e)))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {}", e)))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn build_output(config: &Config) -> CliResult<ConfigOutput> {
    let library_path = config
        .library
        .resolved_path()
        .map_err(|e| CliError::io(format!("Failed to resolve library path: {}", e)))?;

    Ok(ConfigOutput {
        library: LibraryOutput {
            path: library_path.to_string_lossy().to_string(),
        },
        generator: GeneratorOutput {
            endpoint: config.generator.endpoint.clone(),
            model: config.generator.model.clone(),
            api_key_env: config.generator.api_key_env.clone(),
            api_key_set: config.generator.api_key().is_some(),
            temperature: config.generator.temperature,
            timeout_secs: config.generator.timeout_secs,
        },
        ui: UiOutput {
            theme: format!("{:?}", config.ui.theme_mode).to_lowercase(),
            start_with_random: config.ui.start_with_random,
        },
    })
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("HueGrid Configuration");
    println!("=====================");
    println!();

    println!("Library:");
    println!("  Path: {}", output.library.path);
    println!();

    println!("Generator:");
    println!("  Endpoint:    {}", output.generator.endpoint);
    println!("  Model:       {}", output.generator.model);
    println!(
        "  API Key:     ${} ({})",
        output.generator.api_key_env,
        if output.generator.api_key_set { "set" } else { "not set" }
    );
    println!("  Temperature: {}", output.generator.temperature);
    println!("  Timeout:     {}s", output.generator.timeout_secs);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", output.ui.theme);
    println!("  Start With Random: {}", output.ui.start_with_random);
    println!();
}
