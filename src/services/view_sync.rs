//! Derives dropdown contents, enablement, and preview/summary content from the
//! current selection.

use crate::catalog::Catalog;
use crate::config::ImageConfig;
use crate::constants::{DISPLAY_PLACEHOLDER, EMPTY_SUMMARY};
use crate::models::Selection;
use crate::render::{
    Control, DisplayContent, RenderTarget, SelectOption, SummaryContent, SummaryItem,
};

/// Uppercases the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Which controls accept input for a given selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormState {
    /// Color dropdown enabled
    pub color_enabled: bool,
    /// Size dropdown enabled
    pub size_enabled: bool,
    /// Preview action enabled
    pub preview_enabled: bool,
}

impl FormState {
    /// Computes enablement: color needs a type, size needs type and color.
    /// Preview stays enabled regardless; it is a no-op on incomplete selections.
    #[must_use]
    pub const fn for_selection(selection: &Selection) -> Self {
        let has_type = selection.garment_type.is_some();
        Self {
            color_enabled: has_type,
            size_enabled: has_type && selection.color.is_some(),
            preview_enabled: true,
        }
    }
}

/// Writes catalog- and selection-derived state into a render target.
#[derive(Debug, Clone, Copy)]
pub struct ViewSynchronizer<'a> {
    catalog: &'a Catalog,
    images: &'a ImageConfig,
}

impl<'a> ViewSynchronizer<'a> {
    /// Creates a synchronizer over a catalog and image settings.
    #[must_use]
    pub const fn new(catalog: &'a Catalog, images: &'a ImageConfig) -> Self {
        Self { catalog, images }
    }

    /// Replaces a dropdown's options with `values`, labelled by capitalizing
    /// each value, optionally preceded by the placeholder option.
    pub fn populate_dropdown(
        target: &mut dyn RenderTarget,
        control: Control,
        values: &[String],
        include_placeholder: bool,
    ) {
        let mut options = Vec::with_capacity(values.len() + 1);
        if include_placeholder {
            options.push(SelectOption::placeholder(control));
        }
        options.extend(
            values
                .iter()
                .map(|value| SelectOption::new(value.as_str(), capitalize(value))),
        );
        target.set_options(control, options);
    }

    /// Fills the garment type dropdown from the catalog, labelled by display name.
    pub fn populate_garment_types(&self, target: &mut dyn RenderTarget) {
        let mut options = vec![SelectOption::placeholder(Control::GarmentType)];
        options.extend(
            self.catalog
                .garments()
                .iter()
                .map(|g| SelectOption::new(g.id.as_str(), g.name.as_str())),
        );
        target.set_options(Control::GarmentType, options);
    }

    /// Rebuilds the color and size dropdowns for `garment_type`, or empties
    /// them (placeholder only) when no type is selected.
    pub fn rebuild_dependents(&self, target: &mut dyn RenderTarget, garment_type: Option<&str>) {
        let (colors, sizes) = match garment_type {
            Some(t) => (
                self.catalog.available_colors(t),
                self.catalog.available_sizes(t),
            ),
            None => (&[][..], &[][..]),
        };
        Self::populate_dropdown(target, Control::Color, colors, true);
        Self::populate_dropdown(target, Control::Size, sizes, true);
    }

    /// Applies enablement for the current selection.
    pub fn update_form_state(target: &mut dyn RenderTarget, selection: &Selection) {
        let state = FormState::for_selection(selection);
        target.set_enabled(Control::Color, state.color_enabled);
        target.set_enabled(Control::Size, state.size_enabled);
        target.set_enabled(Control::Preview, state.preview_enabled);
    }

    /// Content of the display area for a selection.
    #[must_use]
    pub fn display_content(&self, selection: &Selection) -> DisplayContent {
        match selection.complete() {
            Some((garment_type, color, _)) => {
                let src = self.catalog.resolve_image(garment_type, color).map_or_else(
                    || self.images.preview_fallback.clone(),
                    |image| self.images.resolve(image),
                );
                DisplayContent::Image {
                    src,
                    alt: self.display_name(garment_type),
                    fallback: self.images.preview_fallback.clone(),
                }
            }
            None => DisplayContent::Placeholder {
                message: DISPLAY_PLACEHOLDER.to_string(),
            },
        }
    }

    /// Content of the summary area for a selection.
    #[must_use]
    pub fn summary_content(&self, selection: &Selection) -> SummaryContent {
        match selection.complete() {
            Some((garment_type, color, size)) => SummaryContent::Items {
                items: vec![
                    SummaryItem {
                        label: "Type".to_string(),
                        value: self.display_name(garment_type),
                    },
                    SummaryItem {
                        label: "Color".to_string(),
                        value: capitalize(color),
                    },
                    SummaryItem {
                        label: "Size".to_string(),
                        value: size.to_string(),
                    },
                ],
            },
            None => SummaryContent::Empty {
                message: EMPTY_SUMMARY.to_string(),
            },
        }
    }

    /// Re-renders the display and summary areas.
    pub fn update_display(&self, target: &mut dyn RenderTarget, selection: &Selection) {
        target.set_display(self.display_content(selection));
        target.set_summary(self.summary_content(selection));
    }

    /// Enablement followed by display, the step every handler ends with.
    pub fn sync(&self, target: &mut dyn RenderTarget, selection: &Selection) {
        Self::update_form_state(target, selection);
        self.update_display(target, selection);
    }

    /// Display name for a type, or the raw key when the type is unknown.
    fn display_name(&self, garment_type: &str) -> String {
        self.catalog
            .lookup_garment(garment_type)
            .map_or_else(|| garment_type.to_string(), |g| g.name.clone())
    }
}
