//! Gallery commands: list the curated presets or apply one.

use std::sync::Arc;

use crate::cli::common::{load_catalog, load_config, print_json, CliError, CliResult};
use crate::cli::preview::print_render;
use crate::configurator::Configurator;
use crate::models::View;
use crate::render::RecordingTarget;
use crate::services::gallery_cards;
use clap::{Args, Subcommand};

/// Browse the preset gallery
#[derive(Debug, Clone, Args)]
pub struct GalleryArgs {
    /// Gallery subcommand
    #[command(subcommand)]
    pub command: GalleryCommand,
}

/// Gallery subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum GalleryCommand {
    /// List the gallery cards
    List(ListCardsArgs),
    /// Apply a preset as if its card was clicked
    Apply(ApplyPresetArgs),
}

/// List the gallery cards
#[derive(Debug, Clone, Args)]
pub struct ListCardsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Apply a preset by its index
#[derive(Debug, Clone, Args)]
pub struct ApplyPresetArgs {
    /// Preset index as shown by `gallery list`
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Output the full render snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

impl GalleryArgs {
    /// Execute gallery subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            GalleryCommand::List(args) => args.execute(),
            GalleryCommand::Apply(args) => args.execute(),
        }
    }
}

impl ListCardsArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;
        let config = load_config()?;
        let cards = gallery_cards(&catalog, &config.images);

        if self.json {
            return print_json(&serde_json::json!({ "cards": cards }));
        }

        println!("Gallery ({} presets):", cards.len());
        for card in &cards {
            println!("  [{}] {:<18} {}", card.index, card.title, card.subtitle);
        }
        Ok(())
    }
}

impl ApplyPresetArgs {
    /// Execute apply command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = Arc::new(load_catalog()?);
        let config = load_config()?;
        let preset_count = catalog.presets().len();

        let mut configurator = Configurator::new(catalog, config.images, View::Gallery);
        let mut target = RecordingTarget::new();
        configurator.initialize(&mut target);

        if !configurator.activate_preset(self.index, &mut target) {
            return Err(CliError::not_found(format!(
                "No preset at index {} (gallery has {preset_count} presets)",
                self.index
            )));
        }

        if self.json {
            return print_json(&serde_json::json!({
                "selection": configurator.selection(),
                "view": configurator.visible_view(),
                "render": target,
            }));
        }

        println!("Applied preset {}", self.index);
        print_render(&target);
        Ok(())
    }
}
