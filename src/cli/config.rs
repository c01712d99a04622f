//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::models::View;
use clap::{Args, Subcommand};

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Set the theme mode (auto, light, or dark)
    SetTheme(SetThemeArgs),
    /// Set the view shown at startup (gallery or customize)
    SetStartView(SetStartViewArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set the theme mode
#[derive(Args, Debug, Clone)]
pub struct SetThemeArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(value_name = "MODE")]
    mode: String,
}

/// Set the start view
#[derive(Args, Debug, Clone)]
pub struct SetStartViewArgs {
    /// View name (gallery or customize)
    #[arg(value_name = "VIEW")]
    view: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path()
                    .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::SetTheme(args) => args.execute(),
            ConfigCommand::SetStartView(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            return print_json(&config);
        }

        output_human_readable(&config);
        Ok(())
    }
}

impl SetThemeArgs {
    /// Execute set-theme command
    pub fn execute(&self) -> CliResult<()> {
        let mode = ThemeMode::parse(&self.mode).ok_or_else(|| {
            CliError::validation("Invalid theme mode. Must be 'auto', 'light', or 'dark'")
        })?;

        let mut config = load_config()?;
        config.ui.theme_mode = mode;
        save(&config)?;

        println!("Theme mode set to {}.", mode.as_str());
        Ok(())
    }
}

impl SetStartViewArgs {
    /// Execute set-start-view command
    pub fn execute(&self) -> CliResult<()> {
        let view = View::from_name(&self.view).ok_or_else(|| {
            CliError::validation("Invalid view. Must be 'gallery' or 'customize'")
        })?;

        let mut config = load_config()?;
        config.ui.start_view = view;
        save(&config)?;

        println!("Start view set to {view}.");
        Ok(())
    }
}

fn save(config: &Config) -> CliResult<()> {
    config
        .save()
        .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Duck Attire Configuration");
    println!("=========================");
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode.as_str());
    println!("  Start View: {}", config.ui.start_view);
    println!();

    println!("Images:");
    println!("  Preview Fallback: {}", config.images.preview_fallback);
    println!("  Gallery Fallback: {}", config.images.gallery_fallback);
    match &config.images.base_url {
        Some(base) => println!("  Base URL: {base}"),
        None => println!("  Base URL: (not configured)"),
    }
    println!();
}
