//! Named panels of the configurator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the mutually exclusive panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Grid of preset combinations
    Gallery,
    /// Dropdown form with preview and summary
    #[default]
    Customize,
}

impl View {
    /// All views in tab order.
    pub const ALL: [Self; 2] = [Self::Gallery, Self::Customize];

    /// Looks up a view by its name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|view| view.name() == name)
    }

    /// Machine name used by tab controls (e.g., "gallery").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gallery => "gallery",
            Self::Customize => "customize",
        }
    }

    /// Human-readable tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gallery => "Gallery",
            Self::Customize => "Customize",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
