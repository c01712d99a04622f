//! Exclusive-visibility switch over the named views.

use crate::models::View;
use crate::render::RenderTarget;

/// Tracks which view is visible and which tab carries the active indicator.
///
/// Exactly one view is visible at any time. Switching to an unknown name keeps
/// the current view visible but leaves no tab marked active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSwitcher {
    visible: View,
    active_tab: Option<View>,
}

impl TabSwitcher {
    /// Starts with `view` visible and its tab active.
    #[must_use]
    pub const fn new(view: View) -> Self {
        Self {
            visible: view,
            active_tab: Some(view),
        }
    }

    /// The view currently shown.
    #[must_use]
    pub const fn visible(&self) -> View {
        self.visible
    }

    /// The tab carrying the active indicator, if any.
    #[must_use]
    pub const fn active_tab(&self) -> Option<View> {
        self.active_tab
    }

    /// Switches by view name. Returns the newly visible view, or `None` when
    /// the name is unknown.
    pub fn switch(&mut self, name: &str) -> Option<View> {
        match View::from_name(name) {
            Some(view) => {
                self.show(view);
                Some(view)
            }
            None => {
                tracing::debug!(name, "ignoring switch to unknown view");
                self.active_tab = None;
                None
            }
        }
    }

    /// Switches to a known view.
    pub fn show(&mut self, view: View) {
        self.visible = view;
        self.active_tab = Some(view);
    }

    /// Writes visibility and tab indicators for every view.
    pub fn apply(&self, target: &mut dyn RenderTarget) {
        for view in View::ALL {
            target.set_view_visible(view, view == self.visible);
            target.set_tab_active(view, self.active_tab == Some(view));
        }
    }
}

impl Default for TabSwitcher {
    fn default() -> Self {
        Self::new(View::default())
    }
}
