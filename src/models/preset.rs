//! Curated (type, color, size) combinations shown in the gallery.

use serde::{Deserialize, Serialize};

/// A fixed combination used to prefill the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboPreset {
    /// Garment type key
    pub garment_type: String,
    /// Color value
    pub color: String,
    /// Size value
    pub size: String,
}

impl ComboPreset {
    /// Creates a new preset.
    pub fn new(
        garment_type: impl Into<String>,
        color: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            garment_type: garment_type.into(),
            color: color.into(),
            size: size.into(),
        }
    }
}
