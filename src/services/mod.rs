//! Service layer for configurator logic.
//!
//! This module contains the pieces that derive what the render target shows
//! from the catalog and the current selection.

pub mod gallery;
pub mod tabs;
pub mod view_sync;

// Re-export commonly used types and functions
pub use gallery::gallery_cards;
pub use tabs::TabSwitcher;
pub use view_sync::{capitalize, FormState, ViewSynchronizer};
