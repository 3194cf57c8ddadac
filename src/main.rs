//! HueGrid - Terminal HSL palette explorer
//!
//! Without a subcommand this launches the interactive grid. Subcommands
//! expose the palette core, the theme library and the prompt generator for
//! scripting.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huegrid::cli::{
    CliError, ColorArgs, ConfigArgs, GenerateArgs, GridArgs, RandomArgs, ThemeArgs,
};

/// HueGrid - Terminal HSL palette explorer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a color grid
    Grid(GridArgs),
    /// Print a random grid configuration
    Random(RandomArgs),
    /// Convert a single color
    Color(ColorArgs),
    /// Manage the saved theme library
    Theme(ThemeArgs),
    /// Generate a theme from a mood description
    Generate(GenerateArgs),
    /// View or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> Result<(), CliError> {
        match self {
            Self::Grid(args) => args.execute(),
            Self::Random(args) => args.execute(),
            Self::Color(args) => args.execute(),
            Self::Theme(args) => args.execute(),
            Self::Generate(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(feature = "ratatui")]
fn launch_tui() -> anyhow::Result<()> {
    let config = huegrid::config::Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e:#}");
        huegrid::config::Config::default()
    });

    let mut app_state = huegrid::tui::AppState::new(config)?;
    let mut terminal = huegrid::tui::setup_terminal()?;
    let result = huegrid::tui::run_tui(&mut app_state, &mut terminal);
    huegrid::tui::restore_terminal(terminal)?;
    result
}

#[cfg(not(feature = "ratatui"))]
fn launch_tui() -> anyhow::Result<()> {
    anyhow::bail!("This build has no terminal UI; run with --help to list subcommands")
}

fn main() {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // The TUI owns the terminal, so no subscriber is installed
        if let Err(e) = launch_tui() {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
        return;
    };

    init_tracing(cli.verbose);

    if let Err(e) = command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
