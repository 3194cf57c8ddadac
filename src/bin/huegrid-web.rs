//! HueGrid Web Server Binary
//!
//! This binary starts the HueGrid REST API.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001, library from the config directory)
//! huegrid-web
//!
//! # Specify port and library file
//! huegrid-web --port 8080 --library ~/palettes.json
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huegrid::config::Config;
use huegrid::web;

/// HueGrid Web Server - REST API for palette grids and saved themes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Theme library file.
    /// Defaults to `saved_themes.json` in the platform config directory:
    /// - Linux: ~/.config/HueGrid/
    /// - macOS: ~/Library/Application Support/HueGrid/
    /// - Windows: %APPDATA%\HueGrid\
    #[arg(short, long)]
    library: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load or create configuration
    let mut config = Config::load().unwrap_or_default();
    if let Some(path) = args.library {
        config.library.path = Some(path);
    }

    info!("Generator model: {}", config.generator.model);

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    // Start the server
    web::run_server(config, addr).await
}
