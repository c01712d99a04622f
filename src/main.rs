//! Duck Attire Customizer - pick a garment, color, and size and preview it
//!
//! Without a subcommand the terminal UI starts. Subcommands give headless,
//! scriptable access to the same catalog and preview pipeline.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use duck_attire::catalog::Catalog;
use duck_attire::cli::{CatalogArgs, CliResult, ConfigArgs, GalleryArgs, PreviewArgs};
use duck_attire::config::Config;
use duck_attire::constants::{APP_BINARY_NAME, APP_NAME};
use duck_attire::{logging, tui};

/// Duck Attire Customizer - garment configurator for the terminal
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect the garment catalog
    Catalog(CatalogArgs),
    /// Render the preview and summary for a selection
    Preview(PreviewArgs),
    /// Browse or apply the preset gallery
    Gallery(GalleryArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Catalog(args) => args.execute(),
            Self::Preview(args) => args.execute(),
            Self::Gallery(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return run_interactive();
    };

    logging::init_cli_logging(cli.verbose);
    if let Err(e) = command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().code());
    }
    Ok(())
}

fn run_interactive() -> Result<()> {
    if let Err(e) = logging::init_tui_logging() {
        eprintln!("Warning: file logging disabled: {e:#}");
    }

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: using default configuration: {e:#}");
        Config::default()
    });
    let catalog = Arc::new(Catalog::load()?);
    tracing::info!("{} v{} starting", APP_NAME, env!("CARGO_PKG_VERSION"));

    let mut terminal = tui::setup_terminal()?;
    let mut app_state = tui::AppState::new(config, catalog);

    let result = tui::run_tui(&mut app_state, &mut terminal);

    tui::restore_terminal(terminal)?;

    result
}
