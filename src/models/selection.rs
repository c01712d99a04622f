//! The user's in-progress garment selection.

use serde::{Deserialize, Serialize};

/// Currently chosen type, color, and size.
///
/// Color and size depend on the garment type: changing the type clears both.
/// Setting a dependent field before its prerequisite is allowed; such a
/// selection is simply incomplete. An empty string means "not chosen", which
/// is what a dropdown reports while its placeholder option is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected garment type key
    pub garment_type: Option<String>,
    /// Selected color
    pub color: Option<String>,
    /// Selected size
    pub size: Option<String>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            garment_type: None,
            color: None,
            size: None,
        }
    }

    /// Sets the garment type and clears color and size.
    pub fn set_garment_type(&mut self, garment_type: &str) {
        self.garment_type = non_empty(garment_type);
        self.color = None;
        self.size = None;
    }

    /// Sets the color only.
    pub fn set_color(&mut self, color: &str) {
        self.color = non_empty(color);
    }

    /// Sets the size only.
    pub fn set_size(&mut self, size: &str) {
        self.size = non_empty(size);
    }

    /// Clears all three fields.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns true when type, color, and size are all set.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.garment_type.is_some() && self.color.is_some() && self.size.is_some()
    }

    /// Returns `(type, color, size)` when the selection is complete.
    #[must_use]
    pub fn complete(&self) -> Option<(&str, &str, &str)> {
        match (&self.garment_type, &self.color, &self.size) {
            (Some(t), Some(c), Some(s)) => Some((t, c, s)),
            _ => None,
        }
    }

    /// Garment type as a string slice, empty when unset.
    #[must_use]
    pub fn garment_type_str(&self) -> &str {
        self.garment_type.as_deref().unwrap_or("")
    }

    /// Color as a string slice, empty when unset.
    #[must_use]
    pub fn color_str(&self) -> &str {
        self.color.as_deref().unwrap_or("")
    }

    /// Size as a string slice, empty when unset.
    #[must_use]
    pub fn size_str(&self) -> &str {
        self.size.as_deref().unwrap_or("")
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
