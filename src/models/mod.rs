//! Data models for the garment catalog, the in-progress selection, and views.
//!
//! This module contains the core data structures used throughout the application.
//! Models are designed to be independent of UI and rendering logic.

pub mod garment;
pub mod preset;
pub mod selection;
pub mod view;

// Re-export all model types
pub use garment::GarmentEntry;
pub use preset::ComboPreset;
pub use selection::Selection;
pub use view::View;
