//! Garment catalog and curated presets.
//!
//! The catalog is embedded in the binary at compile time and parsed once at
//! startup. All lookups are pure and never fail: an unknown garment type yields
//! an empty or absent result rather than an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{ComboPreset, GarmentEntry};

/// Schema of catalog.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    version: String,
    garments: Vec<GarmentEntry>,
    #[serde(default)]
    presets: Vec<ComboPreset>,
}

/// Immutable garment catalog with O(1) lookup by type key.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Garments in display order
    garments: Vec<GarmentEntry>,
    /// Curated gallery combinations in display order
    presets: Vec<ComboPreset>,
    /// Fast lookup by garment type key
    lookup: HashMap<String, usize>,
}

impl Catalog {
    /// Loads the catalog from the embedded JSON file.
    pub fn load() -> Result<Self> {
        Self::from_json(include_str!("catalog.json"))
            .context("Failed to load embedded catalog.json")
    }

    /// Parses and validates a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        tracing::debug!(
            version = %file.version,
            garments = file.garments.len(),
            presets = file.presets.len(),
            "parsed catalog"
        );
        Self::new(file.garments, file.presets)
    }

    /// Builds a catalog from parts, validating every entry and preset.
    pub fn new(garments: Vec<GarmentEntry>, presets: Vec<ComboPreset>) -> Result<Self> {
        let mut lookup = HashMap::new();
        for (idx, garment) in garments.iter().enumerate() {
            garment.validate()?;
            if lookup.insert(garment.id.clone(), idx).is_some() {
                anyhow::bail!("Garment type '{}' is declared more than once", garment.id);
            }
        }

        let catalog = Self {
            garments,
            presets: Vec::new(),
            lookup,
        };

        for preset in &presets {
            catalog.validate_preset(preset)?;
        }

        Ok(Self { presets, ..catalog })
    }

    fn validate_preset(&self, preset: &ComboPreset) -> Result<()> {
        let garment = self.lookup_garment(&preset.garment_type).with_context(|| {
            format!("Preset references unknown garment type '{}'", preset.garment_type)
        })?;
        if !garment.has_color(&preset.color) {
            anyhow::bail!(
                "Preset color '{}' is not available for '{}'",
                preset.color,
                preset.garment_type
            );
        }
        if !garment.has_size(&preset.size) {
            anyhow::bail!(
                "Preset size '{}' is not available for '{}'",
                preset.size,
                preset.garment_type
            );
        }
        Ok(())
    }

    /// Gets a garment by type key.
    #[must_use]
    pub fn lookup_garment(&self, garment_type: &str) -> Option<&GarmentEntry> {
        let idx = self.lookup.get(garment_type)?;
        self.garments.get(*idx)
    }

    /// Colors offered for a garment type. Empty if the type is unknown.
    #[must_use]
    pub fn available_colors(&self, garment_type: &str) -> &[String] {
        self.lookup_garment(garment_type)
            .map(|g| g.colors.as_slice())
            .unwrap_or_default()
    }

    /// Sizes offered for a garment type. Empty if the type is unknown.
    #[must_use]
    pub fn available_sizes(&self, garment_type: &str) -> &[String] {
        self.lookup_garment(garment_type)
            .map(|g| g.sizes.as_slice())
            .unwrap_or_default()
    }

    /// Resolves the image for a type and color.
    ///
    /// Returns the color-specific image if one exists, else the garment's base
    /// image, else `None` when the type itself is unknown.
    #[must_use]
    pub fn resolve_image(&self, garment_type: &str, color: &str) -> Option<&str> {
        self.lookup_garment(garment_type)
            .map(|g| g.image_for(color))
    }

    /// All garments in display order.
    #[must_use]
    pub fn garments(&self) -> &[GarmentEntry] {
        &self.garments
    }

    /// Curated gallery presets in display order.
    #[must_use]
    pub fn presets(&self) -> &[ComboPreset] {
        &self.presets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn test_load_embedded_catalog() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.garments().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["sweatshirt", "pants", "jacket"]);
        assert_eq!(catalog.presets().len(), 5);
    }

    #[test]
    fn test_available_lists_match_declared_lists() {
        let catalog = catalog();
        for garment in catalog.garments() {
            let colors = catalog.available_colors(&garment.id);
            let sizes = catalog.available_sizes(&garment.id);
            assert!(!colors.is_empty());
            assert!(!sizes.is_empty());
            assert_eq!(colors, garment.colors.as_slice());
            assert_eq!(sizes, garment.sizes.as_slice());
        }
    }

    #[test]
    fn test_declared_pants_lists() {
        let catalog = catalog();
        assert_eq!(catalog.available_colors("pants"), ["grey", "black", "white"]);
        assert_eq!(
            catalog.available_sizes("pants"),
            ["XS", "S", "M", "L", "XL", "XXL"]
        );
        assert_eq!(catalog.available_sizes("jacket"), ["S", "M", "L", "XL", "XXL"]);
    }

    #[test]
    fn test_unknown_type_yields_empty_results() {
        let catalog = catalog();
        assert!(catalog.lookup_garment("hat").is_none());
        assert!(catalog.available_colors("hat").is_empty());
        assert!(catalog.available_sizes("hat").is_empty());
        assert_eq!(catalog.resolve_image("hat", "black"), None);
    }

    #[test]
    fn test_resolve_image_uses_color_override() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolve_image("pants", "grey"),
            Some("images/HVWB16ORG005_800x grey.webp")
        );
    }

    #[test]
    fn test_resolve_image_falls_back_to_base_image() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolve_image("pants", "purple"),
            Some("images/HVWB16ORG6_800x black.webp")
        );
    }

    #[test]
    fn test_from_json_rejects_duplicate_type() {
        let json = r#"{
            "version": "1",
            "garments": [
                {"id": "hat", "name": "Hat", "colors": ["red"], "sizes": ["M"], "base_image": "a"},
                {"id": "hat", "name": "Hat 2", "colors": ["red"], "sizes": ["M"], "base_image": "b"}
            ]
        }"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_rejects_invalid_preset() {
        let json = r#"{
            "version": "1",
            "garments": [
                {"id": "hat", "name": "Hat", "colors": ["red"], "sizes": ["M"], "base_image": "a"}
            ],
            "presets": [{"garment_type": "hat", "color": "blue", "size": "M"}]
        }"#;
        let err = format!("{:#}", Catalog::from_json(json).unwrap_err());
        assert!(err.contains("blue"));
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        assert!(Catalog::from_json("{ not json").is_err());
    }
}
