//! Render target abstraction.
//!
//! The configurator never touches a concrete document. It writes option lists,
//! values, enablement, and content into named sinks through [`RenderTarget`],
//! so the same handler path drives the terminal UI, the HTML page, and tests.

pub mod html;
pub mod recording;

use serde::Serialize;

use crate::models::{ComboPreset, View};

pub use recording::{ControlState, RecordingTarget};

/// Named input controls of the configurator form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// Garment type dropdown
    GarmentType,
    /// Color dropdown
    Color,
    /// Size dropdown
    Size,
    /// Preview action
    Preview,
    /// Reset action
    Reset,
}

impl Control {
    /// The three dropdowns in form order.
    pub const SELECTORS: [Self; 3] = [Self::GarmentType, Self::Color, Self::Size];

    /// Element id of the control (e.g., "garment-type").
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::GarmentType => "garment-type",
            Self::Color => "color",
            Self::Size => "size",
            Self::Preview => "preview-btn",
            Self::Reset => "reset-btn",
        }
    }

    /// Human-readable label derived from the id ("garment-type" becomes "garment type").
    #[must_use]
    pub fn label(self) -> String {
        self.id().replacen('-', " ", 1)
    }

    /// Text of the synthetic "choose a value" option.
    #[must_use]
    pub fn placeholder_text(self) -> String {
        format!("-- Choose a {} --", self.label())
    }
}

/// One entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Submitted value (empty for the placeholder option)
    pub value: String,
    /// Visible text
    pub label: String,
}

impl SelectOption {
    /// Creates an option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Creates the placeholder option for a control.
    #[must_use]
    pub fn placeholder(control: Control) -> Self {
        Self::new("", control.placeholder_text())
    }

    /// Returns true for the synthetic placeholder option.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// Content of the preview/display area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayContent {
    /// Garment image for a complete selection
    Image {
        /// Image reference
        src: String,
        /// Alternative text (garment display name)
        alt: String,
        /// Reference to load if `src` fails
        fallback: String,
    },
    /// Prompt shown while the selection is incomplete
    Placeholder {
        /// Prompt text
        message: String,
    },
}

/// One labelled line of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryItem {
    /// Field label (e.g., "Color")
    pub label: String,
    /// Field value (e.g., "Grey")
    pub value: String,
}

/// Content of the summary area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummaryContent {
    /// Type, color, and size lines
    Items {
        /// Summary lines in display order
        items: Vec<SummaryItem>,
    },
    /// Message shown while the selection is incomplete
    Empty {
        /// Message text
        message: String,
    },
}

/// A clickable preset card in the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryCard {
    /// Position of the preset in the catalog's preset list
    pub index: usize,
    /// The combination this card applies
    pub preset: ComboPreset,
    /// Image reference
    pub image: String,
    /// Reference to load if `image` fails
    pub fallback: String,
    /// Garment display name
    pub title: String,
    /// "<color> - <size>"
    pub subtitle: String,
}

/// Sink for everything the configurator renders.
///
/// Implementations store or emit what they receive; they never call back into
/// the configurator.
pub trait RenderTarget {
    /// Replaces the option list of a dropdown.
    fn set_options(&mut self, control: Control, options: Vec<SelectOption>);

    /// Sets the current value of a dropdown ("" selects the placeholder).
    fn set_value(&mut self, control: Control, value: &str);

    /// Enables or disables a control.
    fn set_enabled(&mut self, control: Control, enabled: bool);

    /// Replaces the display area content.
    fn set_display(&mut self, content: DisplayContent);

    /// Replaces the summary area content.
    fn set_summary(&mut self, content: SummaryContent);

    /// Replaces the gallery grid.
    fn set_gallery(&mut self, cards: Vec<GalleryCard>);

    /// Shows or hides a view panel.
    fn set_view_visible(&mut self, view: View, visible: bool);

    /// Sets the "active" indicator of a view's tab control.
    fn set_tab_active(&mut self, view: View, active: bool);

    /// Shows a transient notice to the user.
    fn notify(&mut self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_labels() {
        assert_eq!(Control::GarmentType.label(), "garment type");
        assert_eq!(Control::Color.label(), "color");
        assert_eq!(Control::Size.label(), "size");
    }

    #[test]
    fn test_placeholder_text() {
        assert_eq!(Control::Color.placeholder_text(), "-- Choose a color --");
        assert_eq!(
            Control::GarmentType.placeholder_text(),
            "-- Choose a garment type --"
        );
        assert!(SelectOption::placeholder(Control::Size).is_placeholder());
    }
}
