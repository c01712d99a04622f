//! Catalog entry describing one garment type.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// One garment type in the catalog.
///
/// # Validation
///
/// - `id` and `name` must be non-empty
/// - `colors` and `sizes` must be non-empty and free of duplicates
/// - every key of `color_images` must be one of `colors`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarmentEntry {
    /// Catalog key (e.g., "sweatshirt", "pants")
    pub id: String,
    /// Display name (e.g., "Duck Sweatshirt")
    pub name: String,
    /// Allowed colors in display order
    pub colors: Vec<String>,
    /// Allowed sizes in display order
    pub sizes: Vec<String>,
    /// Image shown when a color has no dedicated image
    pub base_image: String,
    /// Per-color image overrides
    #[serde(default)]
    pub color_images: BTreeMap<String, String>,
}

impl GarmentEntry {
    /// Returns the image for `color`, falling back to the base image.
    #[must_use]
    pub fn image_for(&self, color: &str) -> &str {
        self.color_images
            .get(color)
            .map_or(self.base_image.as_str(), String::as_str)
    }

    /// Returns true if `color` is one of this garment's colors.
    #[must_use]
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Returns true if `size` is one of this garment's sizes.
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Checks the entry's structural invariants.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            anyhow::bail!("Garment ID cannot be empty");
        }
        if self.name.trim().is_empty() {
            anyhow::bail!("Garment '{}' has an empty display name", self.id);
        }

        Self::validate_unique(&self.id, "color", &self.colors)?;
        Self::validate_unique(&self.id, "size", &self.sizes)?;

        if let Some(color) = self.color_images.keys().find(|c| !self.has_color(c)) {
            anyhow::bail!(
                "Garment '{}' has an image for undeclared color '{color}'",
                self.id
            );
        }

        Ok(())
    }

    fn validate_unique(id: &str, kind: &str, values: &[String]) -> Result<()> {
        if values.is_empty() {
            anyhow::bail!("Garment '{id}' must declare at least one {kind}");
        }
        let mut seen = HashSet::new();
        for value in values {
            if !seen.insert(value.as_str()) {
                anyhow::bail!("Garment '{id}' declares {kind} '{value}' more than once");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GarmentEntry {
        GarmentEntry {
            id: "pants".to_string(),
            name: "Duck Pants".to_string(),
            colors: vec!["grey".to_string(), "black".to_string()],
            sizes: vec!["S".to_string(), "M".to_string()],
            base_image: "images/black.webp".to_string(),
            color_images: BTreeMap::from([("grey".to_string(), "images/grey.webp".to_string())]),
        }
    }

    #[test]
    fn test_image_for_prefers_override() {
        let entry = sample();
        assert_eq!(entry.image_for("grey"), "images/grey.webp");
        assert_eq!(entry.image_for("black"), "images/black.webp");
        assert_eq!(entry.image_for("purple"), "images/black.webp");
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_size() {
        let mut entry = sample();
        entry.sizes.push("S".to_string());
        let err = entry.validate().unwrap_err().to_string();
        assert!(err.contains("size 'S'"));
    }

    #[test]
    fn test_validate_rejects_empty_colors() {
        let mut entry = sample();
        entry.colors.clear();
        entry.color_images.clear();
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_override_for_unknown_color() {
        let mut entry = sample();
        entry
            .color_images
            .insert("purple".to_string(), "images/purple.webp".to_string());
        assert!(entry.validate().is_err());
    }
}
