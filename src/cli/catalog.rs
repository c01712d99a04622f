//! Catalog inspection commands.
//!
//! Lists the garment types and shows the colors, sizes, and images of one.

use crate::cli::common::{load_catalog, print_json, CliError, CliResult};
use crate::models::GarmentEntry;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Inspect the garment catalog
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Catalog subcommand
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Catalog subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum CatalogCommand {
    /// List all garment types
    List(ListGarmentsArgs),
    /// Show one garment type
    Show(ShowGarmentArgs),
}

/// List all garment types
#[derive(Debug, Clone, Args)]
pub struct ListGarmentsArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show one garment type
#[derive(Debug, Clone, Args)]
pub struct ShowGarmentArgs {
    /// Garment type key (e.g., "pants")
    #[arg(value_name = "TYPE")]
    pub garment_type: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct GarmentSummary<'a> {
    id: &'a str,
    name: &'a str,
    colors: usize,
    sizes: usize,
}

impl CatalogArgs {
    /// Execute catalog subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            CatalogCommand::List(args) => args.execute(),
            CatalogCommand::Show(args) => args.execute(),
        }
    }
}

impl ListGarmentsArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;
        let summaries: Vec<GarmentSummary> = catalog
            .garments()
            .iter()
            .map(|g| GarmentSummary {
                id: &g.id,
                name: &g.name,
                colors: g.colors.len(),
                sizes: g.sizes.len(),
            })
            .collect();

        if self.json {
            return print_json(&serde_json::json!({ "garments": summaries }));
        }

        println!("Garment types ({}):", summaries.len());
        for summary in &summaries {
            println!(
                "  {:<12} {:<18} {} colors, {} sizes",
                summary.id, summary.name, summary.colors, summary.sizes
            );
        }
        Ok(())
    }
}

impl ShowGarmentArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = load_catalog()?;
        let garment = catalog.lookup_garment(&self.garment_type).ok_or_else(|| {
            let known: Vec<&str> = catalog.garments().iter().map(|g| g.id.as_str()).collect();
            CliError::not_found(format!(
                "Unknown garment type '{}'. Known types: {}",
                self.garment_type,
                known.join(", ")
            ))
        })?;

        if self.json {
            return print_json(garment);
        }

        print_garment(garment);
        Ok(())
    }
}

fn print_garment(garment: &GarmentEntry) {
    println!("{} ({})", garment.name, garment.id);
    println!("  Colors: {}", garment.colors.join(", "));
    println!("  Sizes:  {}", garment.sizes.join(", "));
    println!("  Default image: {}", garment.base_image);
    for color in &garment.colors {
        println!("  {color:<10} {}", garment.image_for(color));
    }
}
