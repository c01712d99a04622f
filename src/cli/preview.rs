//! Headless preview command.
//!
//! Replays a selection through the same handlers the interactive front ends
//! use and prints what the customize view would show.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::cli::common::{load_catalog, load_config, print_json, CliError, CliResult};
use crate::configurator::Configurator;
use crate::models::{Selection, View};
use crate::render::html::{display_fragment, summary_fragment};
use crate::render::{DisplayContent, RecordingTarget, SummaryContent};
use clap::Args;
use serde::Serialize;

/// Render the preview and summary for a selection
#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    /// Garment type key (e.g., "pants")
    #[arg(long = "type", value_name = "TYPE")]
    pub garment_type: Option<String>,

    /// Color (e.g., "grey")
    #[arg(long, value_name = "COLOR")]
    pub color: Option<String>,

    /// Size (e.g., "XL")
    #[arg(long, value_name = "SIZE")]
    pub size: Option<String>,

    /// Output the full render snapshot as JSON
    #[arg(long, conflicts_with = "html")]
    pub json: bool,

    /// Output the display and summary as HTML fragments
    #[arg(long)]
    pub html: bool,

    /// Fail unless the selection is complete and valid for the catalog
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct PreviewOutput<'a> {
    selection: &'a Selection,
    complete: bool,
    notice: Option<String>,
    render: &'a RecordingTarget,
}

impl PreviewArgs {
    /// Execute preview command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;
        let config = load_config()?;

        let mut configurator =
            Configurator::new(Arc::new(catalog), config.images, View::Customize);
        let mut target = RecordingTarget::new();
        configurator.initialize(&mut target);

        if let Some(garment_type) = &self.garment_type {
            configurator.handle_garment_type_change(garment_type, &mut target);
        }
        if let Some(color) = &self.color {
            configurator.handle_color_change(color, &mut target);
        }
        if let Some(size) = &self.size {
            configurator.handle_size_change(size, &mut target);
        }

        if self.strict {
            validate_selection(configurator.catalog(), configurator.selection())
                .map_err(CliError::validation)?;
        }

        let notice = configurator.preview(&mut target);

        if self.json {
            return print_json(&PreviewOutput {
                selection: configurator.selection(),
                complete: configurator.selection().is_complete(),
                notice,
                render: &target,
            });
        }

        if self.html {
            if let Some(display) = &target.display {
                println!("{}", display_fragment(display));
            }
            if let Some(summary) = &target.summary {
                println!("{}", summary_fragment(summary));
            }
            return Ok(());
        }

        if let Some(notice) = notice {
            println!("{notice}");
        }
        print_render(&target);
        Ok(())
    }
}

/// Checks that the selection is complete and that every value is offered by
/// the catalog for the chosen garment type.
pub fn validate_selection(catalog: &Catalog, selection: &Selection) -> Result<(), String> {
    let missing: Vec<&str> = [
        ("type", selection.garment_type.is_none()),
        ("color", selection.color.is_none()),
        ("size", selection.size.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, absent)| absent.then_some(name))
    .collect();
    if !missing.is_empty() {
        return Err(format!("Selection incomplete: missing {}", missing.join(", ")));
    }

    let garment_type = selection.garment_type_str();
    let garment = catalog
        .lookup_garment(garment_type)
        .ok_or_else(|| format!("Unknown garment type '{garment_type}'"))?;

    if !garment.has_color(selection.color_str()) {
        return Err(format!(
            "Color '{}' is not available for {} (choose from: {})",
            selection.color_str(),
            garment.name,
            garment.colors.join(", ")
        ));
    }
    if !garment.has_size(selection.size_str()) {
        return Err(format!(
            "Size '{}' is not available for {} (choose from: {})",
            selection.size_str(),
            garment.name,
            garment.sizes.join(", ")
        ));
    }
    Ok(())
}

/// Prints the display and summary areas as plain text.
pub(crate) fn print_render(target: &RecordingTarget) {
    match &target.display {
        Some(DisplayContent::Image { src, .. }) => println!("Image: {src}"),
        Some(DisplayContent::Placeholder { message }) => println!("{message}"),
        None => {}
    }
    match &target.summary {
        Some(SummaryContent::Items { items }) => {
            for item in items {
                println!("{}: {}", item.label, item.value);
            }
        }
        Some(SummaryContent::Empty { message }) => println!("{message}"),
        None => {}
    }
}
