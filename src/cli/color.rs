//! Single-color conversion commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{Contrast, HslColor, RgbColor};

/// Convert a single color
#[derive(Args, Debug)]
pub struct ColorArgs {
    #[command(subcommand)]
    command: ColorCommand,
}

#[derive(Subcommand, Debug)]
enum ColorCommand {
    /// Convert an HSL triple to hex
    Hex(HexArgs),
    /// Pick black or white text for a background color
    Contrast(ContrastArgs),
}

/// Convert an HSL triple to hex
#[derive(Args, Debug)]
pub struct HexArgs {
    /// Hue (degrees)
    #[arg(allow_negative_numbers = true)]
    hue: f64,
    /// Saturation (percent)
    #[arg(allow_negative_numbers = true)]
    sat: f64,
    /// Lightness (percent)
    #[arg(allow_negative_numbers = true)]
    light: f64,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Pick black or white text for a background color
#[derive(Args, Debug)]
pub struct ContrastArgs {
    /// Background color (#rrggbb)
    hex: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ColorOutput {
    hex: String,
    contrast: Contrast,
}

impl ColorArgs {
    /// Execute color subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ColorCommand::Hex(args) => args.execute(),
            ColorCommand::Contrast(args) => args.execute(),
        }
    }
}

impl HexArgs {
    /// Execute hex command
    pub fn execute(&self) -> CliResult<()> {
        let rgb = HslColor::new(self.hue, self.sat, self.light).to_rgb();
        output(&rgb, self.json)
    }
}

impl ContrastArgs {
    /// Execute contrast command
    pub fn execute(&self) -> CliResult<()> {
        let rgb = RgbColor::from_hex(&self.hex).map_err(|e| CliError::validation(format!("{e:#}")))?;
        output(&rgb, self.json)
    }
}

fn output(rgb: &RgbColor, json: bool) -> CliResult<()> {
    let result = ColorOutput {
        hex: rgb.to_hex(),
        contrast: rgb.contrast(),
    };

    if json {
        print_json(&result)?;
    } else {
        println!("{} (text: {})", result.hex, result.contrast);
    }
    Ok(())
}
