//! CLI command handlers for Duck Attire.
//!
//! This module provides headless, scriptable access to the catalog, the
//! preview pipeline, the gallery, and the configuration file.

pub mod catalog;
pub mod common;
pub mod config;
pub mod gallery;
pub mod preview;

// Re-export types used by main.rs and tests
pub use catalog::CatalogArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use gallery::GalleryArgs;
pub use preview::PreviewArgs;
