//! Application state and input handlers.
//!
//! [`Configurator`] owns the one mutable piece of state, the [`Selection`],
//! together with the view switch. Every handler mutates the selection first and
//! then re-derives what the render target shows, so the target never holds
//! state the configurator does not know about.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::ImageConfig;
use crate::models::{ComboPreset, Selection, View};
use crate::render::{Control, RenderTarget};
use crate::services::{gallery_cards, FormState, TabSwitcher, ViewSynchronizer};

/// Owns the selection and drives a [`RenderTarget`].
#[derive(Debug, Clone)]
pub struct Configurator {
    catalog: Arc<Catalog>,
    images: ImageConfig,
    selection: Selection,
    tabs: TabSwitcher,
}

impl Configurator {
    /// Creates a configurator with an empty selection, showing `start_view`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, images: ImageConfig, start_view: View) -> Self {
        Self {
            catalog,
            images,
            selection: Selection::new(),
            tabs: TabSwitcher::new(start_view),
        }
    }

    fn sync(&self) -> ViewSynchronizer<'_> {
        ViewSynchronizer::new(&self.catalog, &self.images)
    }

    /// Renders the initial state: type options, empty dependents, gallery,
    /// enablement, display, and the start view.
    pub fn initialize(&self, target: &mut dyn RenderTarget) {
        let sync = self.sync();
        sync.populate_garment_types(target);
        sync.rebuild_dependents(target, self.selection.garment_type.as_deref());
        target.set_gallery(gallery_cards(&self.catalog, &self.images));
        sync.sync(target, &self.selection);
        self.tabs.apply(target);
        tracing::debug!(view = %self.tabs.visible(), "configurator initialized");
    }

    /// Garment type dropdown changed.
    pub fn handle_garment_type_change(&mut self, value: &str, target: &mut dyn RenderTarget) {
        tracing::debug!(garment_type = value, "garment type changed");
        self.selection.set_garment_type(value);
        target.set_value(Control::GarmentType, value);

        let sync = self.sync();
        sync.rebuild_dependents(target, self.selection.garment_type.as_deref());
        sync.sync(target, &self.selection);
    }

    /// Color dropdown changed.
    pub fn handle_color_change(&mut self, value: &str, target: &mut dyn RenderTarget) {
        tracing::debug!(color = value, "color changed");
        self.selection.set_color(value);
        target.set_value(Control::Color, value);
        self.sync().sync(target, &self.selection);
    }

    /// Size dropdown changed.
    pub fn handle_size_change(&mut self, value: &str, target: &mut dyn RenderTarget) {
        tracing::debug!(size = value, "size changed");
        self.selection.set_size(value);
        target.set_value(Control::Size, value);
        self.sync().sync(target, &self.selection);
    }

    /// Clears the selection and returns every control to its placeholder.
    pub fn reset_all(&mut self, target: &mut dyn RenderTarget) {
        tracing::debug!("selection reset");
        self.selection.reset();
        for control in Control::SELECTORS {
            target.set_value(control, "");
        }

        let sync = self.sync();
        sync.rebuild_dependents(target, None);
        sync.sync(target, &self.selection);
    }

    /// Re-renders the display and emits a notice when the selection is
    /// complete. Does nothing otherwise.
    ///
    /// Returns the notice text, if one was emitted.
    pub fn preview(&self, target: &mut dyn RenderTarget) -> Option<String> {
        let Some((garment_type, color, size)) = self.selection.complete() else {
            tracing::debug!("preview ignored, selection incomplete");
            return None;
        };

        let message = format!("Previewing your {color} {garment_type} in size {size}!");
        self.sync().update_display(target, &self.selection);
        target.notify(&message);
        tracing::info!(garment_type, color, size, "preview");
        Some(message)
    }

    /// Applies the preset at `index` and switches to the customize view.
    ///
    /// Returns false (and changes nothing) when no preset has that index.
    pub fn activate_preset(&mut self, index: usize, target: &mut dyn RenderTarget) -> bool {
        let Some(preset) = self.catalog.presets().get(index).cloned() else {
            tracing::debug!(index, "no preset at index");
            return false;
        };
        self.apply_combo(&preset, target);
        true
    }

    /// Replays a combination through the dropdown handlers, then shows the
    /// customize view.
    pub fn apply_combo(&mut self, combo: &ComboPreset, target: &mut dyn RenderTarget) {
        tracing::debug!(
            garment_type = %combo.garment_type,
            color = %combo.color,
            size = %combo.size,
            "applying combination"
        );
        self.handle_garment_type_change(&combo.garment_type, target);
        self.handle_color_change(&combo.color, target);
        self.handle_size_change(&combo.size, target);
        self.switch_view(View::Customize.name(), target);
    }

    /// Switches the visible view by name. Unknown names keep the current view
    /// visible and clear every tab indicator.
    pub fn switch_view(&mut self, name: &str, target: &mut dyn RenderTarget) -> Option<View> {
        let switched = self.tabs.switch(name);
        self.tabs.apply(target);
        switched
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The catalog this configurator reads from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Image settings in effect.
    #[must_use]
    pub const fn images(&self) -> &ImageConfig {
        &self.images
    }

    /// The visible view.
    #[must_use]
    pub const fn visible_view(&self) -> View {
        self.tabs.visible()
    }

    /// The tab carrying the active indicator, if any.
    #[must_use]
    pub const fn active_tab(&self) -> Option<View> {
        self.tabs.active_tab()
    }

    /// Enablement for the current selection.
    #[must_use]
    pub const fn form_state(&self) -> FormState {
        FormState::for_selection(&self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DISPLAY_PLACEHOLDER, EMPTY_SUMMARY};
    use crate::render::{DisplayContent, RecordingTarget, SummaryContent};

    fn setup(start_view: View) -> (Configurator, RecordingTarget) {
        let catalog = Arc::new(Catalog::load().unwrap());
        let configurator = Configurator::new(catalog, ImageConfig::default(), start_view);
        let mut target = RecordingTarget::new();
        configurator.initialize(&mut target);
        (configurator, target)
    }

    fn summary_values(target: &RecordingTarget) -> Vec<String> {
        match &target.summary {
            Some(SummaryContent::Items { items }) => {
                items.iter().map(|i| i.value.clone()).collect()
            }
            other => panic!("expected summary items, got {other:?}"),
        }
    }

    #[test]
    fn test_initialize_renders_empty_form() {
        let (_, target) = setup(View::Customize);

        assert_eq!(
            target.option_values(Control::GarmentType),
            vec!["sweatshirt", "pants", "jacket"]
        );
        assert!(target.option_values(Control::Color).is_empty());
        assert!(!target.is_enabled(Control::Color));
        assert!(!target.is_enabled(Control::Size));
        assert!(target.is_enabled(Control::Preview));
        assert_eq!(target.gallery.len(), 5);
        assert!(target.is_visible(View::Customize));
        assert!(!target.is_visible(View::Gallery));
        assert!(target.is_tab_active(View::Customize));
        assert_eq!(
            target.display,
            Some(DisplayContent::Placeholder {
                message: DISPLAY_PLACEHOLDER.to_string()
            })
        );
    }

    #[test]
    fn test_complete_selection_renders_image_and_summary() {
        let (mut configurator, mut target) = setup(View::Customize);

        configurator.handle_garment_type_change("pants", &mut target);
        configurator.handle_color_change("grey", &mut target);
        configurator.handle_size_change("XL", &mut target);

        let Some(DisplayContent::Image { src, alt, .. }) = &target.display else {
            panic!("expected image, got {:?}", target.display);
        };
        assert_eq!(src, "images/HVWB16ORG005_800x grey.webp");
        assert_eq!(alt, "Duck Pants");
        assert_eq!(summary_values(&target), vec!["Duck Pants", "Grey", "XL"]);
    }

    #[test]
    fn test_type_only_enables_color() {
        let (mut configurator, mut target) = setup(View::Customize);

        configurator.handle_garment_type_change("jacket", &mut target);

        assert!(target.is_enabled(Control::Color));
        assert!(!target.is_enabled(Control::Size));
        assert_eq!(target.option_values(Control::Color), vec!["black", "white"]);
        assert_eq!(
            target.option_values(Control::Size),
            vec!["S", "M", "L", "XL", "XXL"]
        );
        assert!(matches!(
            target.display,
            Some(DisplayContent::Placeholder { .. })
        ));
    }

    #[test]
    fn test_changing_type_clears_dependents() {
        let (mut configurator, mut target) = setup(View::Customize);

        configurator.handle_garment_type_change("pants", &mut target);
        configurator.handle_color_change("grey", &mut target);
        configurator.handle_size_change("XL", &mut target);
        configurator.handle_garment_type_change("jacket", &mut target);

        assert_eq!(configurator.selection().color, None);
        assert_eq!(configurator.selection().size, None);
        assert_eq!(target.control(Control::Color).value, "");
        assert!(!target.is_enabled(Control::Size));
        assert_eq!(
            target.summary,
            Some(SummaryContent::Empty {
                message: EMPTY_SUMMARY.to_string()
            })
        );
    }

    #[test]
    fn test_gallery_card_prefills_selection_and_switches_view() {
        let (mut configurator, mut target) = setup(View::Gallery);
        assert!(target.is_visible(View::Gallery));

        assert!(configurator.activate_preset(3, &mut target));

        assert_eq!(configurator.selection().complete(), Some(("sweatshirt", "green", "S")));
        assert_eq!(configurator.visible_view(), View::Customize);
        assert!(target.is_visible(View::Customize));
        assert!(!target.is_visible(View::Gallery));
        assert!(target.is_tab_active(View::Customize));
        assert_eq!(target.control(Control::Color).value, "green");
        assert_eq!(summary_values(&target), vec!["Duck Sweatshirt", "Green", "S"]);
    }

    #[test]
    fn test_activate_missing_preset_is_noop() {
        let (mut configurator, mut target) = setup(View::Gallery);
        let before = target.clone();

        assert!(!configurator.activate_preset(99, &mut target));
        assert_eq!(target, before);
        assert_eq!(configurator.selection(), &Selection::new());
    }

    #[test]
    fn test_reset_after_selection() {
        let (mut configurator, mut target) = setup(View::Customize);
        configurator.activate_preset(0, &mut target);

        configurator.reset_all(&mut target);

        assert_eq!(configurator.selection(), &Selection::new());
        for control in Control::SELECTORS {
            assert_eq!(target.control(control).value, "");
        }
        assert!(!target.is_enabled(Control::Color));
        assert!(!target.is_enabled(Control::Size));
        assert!(target.option_values(Control::Color).is_empty());
        assert_eq!(target.control(Control::Color).options.len(), 1);
        assert_eq!(
            target.display,
            Some(DisplayContent::Placeholder {
                message: DISPLAY_PLACEHOLDER.to_string()
            })
        );
    }

    #[test]
    fn test_unknown_view_keeps_previous_visible() {
        let (mut configurator, mut target) = setup(View::Gallery);

        assert_eq!(configurator.switch_view("checkout", &mut target), None);

        assert!(target.is_visible(View::Gallery));
        assert!(!target.is_visible(View::Customize));
        assert!(target.active_tabs.is_empty());
        assert_eq!(configurator.active_tab(), None);

        assert_eq!(
            configurator.switch_view("customize", &mut target),
            Some(View::Customize)
        );
        assert!(target.is_tab_active(View::Customize));
    }

    #[test]
    fn test_preview_complete_emits_notice() {
        let (mut configurator, mut target) = setup(View::Customize);
        configurator.activate_preset(4, &mut target);

        let notice = configurator.preview(&mut target);

        assert_eq!(
            notice.as_deref(),
            Some("Previewing your grey pants in size XL!")
        );
        assert_eq!(target.last_notice(), notice.as_deref());
    }

    #[test]
    fn test_preview_incomplete_does_nothing() {
        let (mut configurator, mut target) = setup(View::Customize);
        configurator.handle_garment_type_change("pants", &mut target);
        let before = target.clone();

        assert_eq!(configurator.preview(&mut target), None);
        assert_eq!(target, before);
    }

    #[test]
    fn test_color_before_type_stays_incomplete() {
        let (mut configurator, mut target) = setup(View::Customize);

        configurator.handle_color_change("black", &mut target);
        configurator.handle_size_change("M", &mut target);

        assert!(!configurator.selection().is_complete());
        assert!(!configurator.form_state().color_enabled);
        assert!(matches!(
            target.display,
            Some(DisplayContent::Placeholder { .. })
        ));
    }

    #[test]
    fn test_unknown_type_complete_selection_uses_fallback() {
        let (mut configurator, mut target) = setup(View::Customize);

        configurator.handle_garment_type_change("hat", &mut target);
        configurator.handle_color_change("red", &mut target);
        configurator.handle_size_change("M", &mut target);

        assert!(target.option_values(Control::Color).is_empty());
        let Some(DisplayContent::Image { src, alt, .. }) = &target.display else {
            panic!("expected image");
        };
        assert_eq!(src, &configurator.images().preview_fallback);
        assert_eq!(alt, "hat");
    }
}
