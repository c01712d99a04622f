//! In-memory render target.
//!
//! Keeps the latest value written to every sink. The terminal UI draws from it,
//! the CLI serializes it, and tests assert against it.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{
    Control, DisplayContent, GalleryCard, RenderTarget, SelectOption, SummaryContent,
};
use crate::models::View;

/// Last-known state of one control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlState {
    /// Dropdown options (empty for buttons)
    pub options: Vec<SelectOption>,
    /// Current value
    pub value: String,
    /// Whether the control accepts input
    pub enabled: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            value: String::new(),
            enabled: true,
        }
    }
}

/// Render target that records everything it is told.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordingTarget {
    /// Per-control state
    pub controls: BTreeMap<Control, ControlState>,
    /// Display area content
    pub display: Option<DisplayContent>,
    /// Summary area content
    pub summary: Option<SummaryContent>,
    /// Gallery cards
    pub gallery: Vec<GalleryCard>,
    /// Views currently visible
    pub visible_views: Vec<View>,
    /// Views whose tab control carries the active indicator
    pub active_tabs: Vec<View>,
    /// Notices in the order they were emitted
    pub notices: Vec<String>,
}

impl RecordingTarget {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a control (default state if never written).
    #[must_use]
    pub fn control(&self, control: Control) -> ControlState {
        self.controls.get(&control).cloned().unwrap_or_default()
    }

    /// Returns true if the control is enabled.
    #[must_use]
    pub fn is_enabled(&self, control: Control) -> bool {
        self.controls.get(&control).map_or(true, |c| c.enabled)
    }

    /// Non-placeholder option values of a dropdown.
    #[must_use]
    pub fn option_values(&self, control: Control) -> Vec<String> {
        self.controls
            .get(&control)
            .map(|c| {
                c.options
                    .iter()
                    .filter(|o| !o.is_placeholder())
                    .map(|o| o.value.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns true if the view panel is visible.
    #[must_use]
    pub fn is_visible(&self, view: View) -> bool {
        self.visible_views.contains(&view)
    }

    /// Returns true if the view's tab control is marked active.
    #[must_use]
    pub fn is_tab_active(&self, view: View) -> bool {
        self.active_tabs.contains(&view)
    }

    /// Most recent notice, if any.
    #[must_use]
    pub fn last_notice(&self) -> Option<&str> {
        self.notices.last().map(String::as_str)
    }

    /// Removes and returns every notice emitted so far.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn control_mut(&mut self, control: Control) -> &mut ControlState {
        self.controls.entry(control).or_default()
    }
}

fn toggle(views: &mut Vec<View>, view: View, on: bool) {
    views.retain(|v| *v != view);
    if on {
        views.push(view);
    }
}

impl RenderTarget for RecordingTarget {
    fn set_options(&mut self, control: Control, options: Vec<SelectOption>) {
        let state = self.control_mut(control);
        state.options = options;
        state.value.clear();
    }

    fn set_value(&mut self, control: Control, value: &str) {
        self.control_mut(control).value = value.to_string();
    }

    fn set_enabled(&mut self, control: Control, enabled: bool) {
        self.control_mut(control).enabled = enabled;
    }

    fn set_display(&mut self, content: DisplayContent) {
        self.display = Some(content);
    }

    fn set_summary(&mut self, content: SummaryContent) {
        self.summary = Some(content);
    }

    fn set_gallery(&mut self, cards: Vec<GalleryCard>) {
        self.gallery = cards;
    }

    fn set_view_visible(&mut self, view: View, visible: bool) {
        toggle(&mut self.visible_views, view, visible);
    }

    fn set_tab_active(&mut self, view: View, active: bool) {
        toggle(&mut self.active_tabs, view, active);
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritten_control_defaults_to_enabled() {
        let target = RecordingTarget::new();
        assert!(target.is_enabled(Control::Color));
        assert!(target.option_values(Control::Color).is_empty());
    }

    #[test]
    fn test_take_notices_drains() {
        let mut target = RecordingTarget::new();
        target.notify("first");
        target.notify("second");

        assert_eq!(target.take_notices(), ["first", "second"]);
        assert!(target.notices.is_empty());
        assert_eq!(target.last_notice(), None);
    }

    #[test]
    fn test_set_options_resets_value() {
        let mut target = RecordingTarget::new();
        target.set_value(Control::Color, "grey");
        target.set_options(
            Control::Color,
            vec![
                SelectOption::placeholder(Control::Color),
                SelectOption::new("black", "Black"),
            ],
        );
        assert_eq!(target.control(Control::Color).value, "");
        assert_eq!(target.option_values(Control::Color), vec!["black"]);
    }

    #[test]
    fn test_visibility_toggles_do_not_duplicate() {
        let mut target = RecordingTarget::new();
        target.set_view_visible(View::Gallery, true);
        target.set_view_visible(View::Gallery, true);
        assert_eq!(target.visible_views, vec![View::Gallery]);
        target.set_view_visible(View::Gallery, false);
        assert!(!target.is_visible(View::Gallery));
    }
}
