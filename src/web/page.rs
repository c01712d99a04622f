//! Server-rendered configurator page.
//!
//! [`HtmlPage`] is a [`RenderTarget`] that keeps what the configurator tells it
//! and turns it into one complete HTML document. Tabs and gallery cards are
//! plain links. A dropdown submits the form and names itself in `changed`, so
//! the server can drop the dependent values the change invalidated.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::constants::APP_NAME;
use crate::models::View;
use crate::render::html::{
    display_fragment, escape, gallery_fragment, options_fragment, summary_fragment,
};
use crate::render::{
    Control, ControlState, DisplayContent, GalleryCard, RenderTarget, SelectOption,
    SummaryContent,
};

/// Query parameter carrying each dropdown's value.
const fn query_key(control: Control) -> &'static str {
    match control {
        Control::GarmentType => "type",
        Control::Color => "color",
        Control::Size => "size",
        Control::Preview | Control::Reset => "action",
    }
}

/// Link to a preset card.
#[must_use]
pub fn preset_href(card: &GalleryCard) -> String {
    format!("/?preset={}", card.index)
}

/// HTML document built from render calls.
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    controls: BTreeMap<Control, ControlState>,
    display: Option<DisplayContent>,
    summary: Option<SummaryContent>,
    gallery: Vec<GalleryCard>,
    visible: Vec<View>,
    active_tabs: Vec<View>,
    notices: Vec<String>,
}

impl HtmlPage {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn control(&self, control: Control) -> ControlState {
        self.controls.get(&control).cloned().unwrap_or_default()
    }

    fn control_mut(&mut self, control: Control) -> &mut ControlState {
        self.controls.entry(control).or_default()
    }

    /// Query string reproducing the current dropdown values, plus `view`.
    fn state_query(&self, view: View) -> String {
        let mut pairs = vec![("view", view.name().to_string())];
        for control in Control::SELECTORS {
            let value = self.control(control).value;
            if !value.is_empty() {
                pairs.push((query_key(control), value));
            }
        }
        // String pairs always serialize.
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }

    fn tabs(&self) -> String {
        let mut html = String::from(r#"<nav class="tabs">"#);
        for view in View::ALL {
            let class = if self.active_tabs.contains(&view) {
                "tab active"
            } else {
                "tab"
            };
            let _ = write!(
                html,
                r#"<a class="{class}" id="{name}-tab" href="/?{query}">{label}</a>"#,
                name = view.name(),
                query = escape(&self.state_query(view)),
                label = view.label(),
            );
        }
        html.push_str("</nav>");
        html
    }

    fn select(&self, control: Control) -> String {
        let state = self.control(control);
        let disabled = if state.enabled { "" } else { " disabled" };
        format!(
            concat!(
                r#"<label for="{id}">{label}</label>"#,
                r#"<select id="{id}" name="{name}" onchange="this.form.changed.value='{name}';this.form.submit()"{disabled}>"#,
                "{options}</select>"
            ),
            id = control.id(),
            label = escape(&crate::services::capitalize(&control.label())),
            name = query_key(control),
            disabled = disabled,
            options = options_fragment(&state.options, &state.value),
        )
    }

    fn form(&self) -> String {
        let mut html = String::from(r#"<form class="customize-form" method="get" action="/">"#);
        html.push_str(r#"<input type="hidden" name="view" value="customize">"#);
        html.push_str(r#"<input type="hidden" name="changed" value="">"#);
        for control in Control::SELECTORS {
            html.push_str(&self.select(control));
        }
        let preview_disabled = if self.control(Control::Preview).enabled {
            ""
        } else {
            " disabled"
        };
        let _ = write!(
            html,
            r#"<button type="submit" id="{}" name="action" value="preview"{preview_disabled}>Preview</button>"#,
            Control::Preview.id()
        );
        let _ = write!(
            html,
            r#"<a class="button" id="{}" href="/?view=customize&amp;action=reset">Reset</a>"#,
            Control::Reset.id()
        );
        html.push_str("</form>");
        html
    }

    fn panel(&self, view: View, body: &str) -> String {
        let hidden = if self.visible.contains(&view) {
            ""
        } else {
            " hidden"
        };
        format!(
            r#"<section id="{}-view" class="view"{hidden}>{body}</section>"#,
            view.name()
        )
    }

    /// Renders the complete document.
    #[must_use]
    pub fn into_document(self) -> String {
        let gallery = format!(
            r#"<div class="gallery-grid">{}</div>"#,
            gallery_fragment(&self.gallery, preset_href)
        );

        let display = self
            .display
            .as_ref()
            .map(display_fragment)
            .unwrap_or_default();
        let summary = self
            .summary
            .as_ref()
            .map(summary_fragment)
            .unwrap_or_default();
        let customize = format!(
            concat!(
                "{form}",
                r#"<div id="display-area" class="display-area">{display}</div>"#,
                r#"<div id="summary" class="summary"><h3>Your Selection</h3>{summary}</div>"#
            ),
            form = self.form(),
            display = display,
            summary = summary,
        );

        let mut notices = String::new();
        for notice in &self.notices {
            let _ = write!(notices, r#"<p class="notice" role="status">{}</p>"#, escape(notice));
        }

        format!(
            concat!(
                "<!DOCTYPE html>\n",
                r#"<html lang="en"><head><meta charset="utf-8">"#,
                r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
                "<title>{title}</title>",
                r#"<link rel="stylesheet" href="/static/style.css">"#,
                "</head><body><header><h1>{title}</h1>{tabs}</header>",
                "{notices}<main>{gallery}{customize}</main></body></html>\n"
            ),
            title = APP_NAME,
            tabs = self.tabs(),
            notices = notices,
            gallery = self.panel(View::Gallery, &gallery),
            customize = self.panel(View::Customize, &customize),
        )
    }
}

fn toggle(views: &mut Vec<View>, view: View, on: bool) {
    views.retain(|v| *v != view);
    if on {
        views.push(view);
    }
}

impl RenderTarget for HtmlPage {
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
        toggle(&mut self.visible, view, visible);
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
    use crate::catalog::Catalog;
    use crate::config::ImageConfig;
    use crate::configurator::Configurator;
    use std::sync::Arc;

    fn configurator(start_view: View) -> Configurator {
        let catalog = Arc::new(Catalog::load().unwrap());
        Configurator::new(catalog, ImageConfig::default(), start_view)
    }

    #[test]
    fn test_initial_document() {
        let configurator = configurator(View::Customize);
        let mut page = HtmlPage::new();
        configurator.initialize(&mut page);
        let html = page.into_document();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<select id="garment-type" name="type""#));
        assert!(html.contains(r#"<option value="" selected>-- Choose a garment type --</option>"#));
        assert!(html.contains(r#"<option value="pants">Duck Pants</option>"#));
        assert!(html.contains(r#"<select id="color" name="color" onchange="this.form.changed.value='color';this.form.submit()" disabled>"#));
        assert!(html.contains("Select options above to see your customized attire"));
        assert!(html.contains("No selections made yet."));
        assert!(html.contains(r#"<section id="gallery-view" class="view" hidden>"#));
        assert!(html.contains(r#"<section id="customize-view" class="view">"#));
        assert!(html.contains(r#"class="tab active" id="customize-tab""#));
    }

    #[test]
    fn test_complete_selection_document() {
        let mut configurator = configurator(View::Customize);
        let mut page = HtmlPage::new();
        configurator.initialize(&mut page);
        configurator.handle_garment_type_change("pants", &mut page);
        configurator.handle_color_change("grey", &mut page);
        configurator.handle_size_change("M", &mut page);
        configurator.preview(&mut page);
        let html = page.into_document();

        assert!(html.contains(r#"<img src="images/HVWB16ORG005_800x grey.webp" alt="Duck Pants""#));
        assert!(html.contains(r#"<option value="grey" selected>Grey</option>"#));
        assert!(html.contains(r#"<strong>Size:</strong> M"#));
        assert!(html.contains("Previewing your grey pants in size M!"));
        assert!(html.contains("view=gallery&amp;type=pants&amp;color=grey&amp;size=M"));
    }

    #[test]
    fn test_gallery_links() {
        let configurator = configurator(View::Gallery);
        let mut page = HtmlPage::new();
        configurator.initialize(&mut page);
        let html = page.into_document();

        assert!(html.contains(r#"href="/?preset=0""#));
        assert!(html.contains(r#"href="/?preset=4""#));
        assert!(html.contains(r#"<section id="customize-view" class="view" hidden>"#));
    }

    #[test]
    fn test_state_query_encodes_values() {
        let mut page = HtmlPage::new();
        page.set_value(Control::GarmentType, "a b&c");
        page.set_value(Control::Size, "XL");
        assert_eq!(
            page.state_query(View::Customize),
            "view=customize&type=a+b%26c&size=XL"
        );
    }

    #[test]
    fn test_selects_report_which_field_changed() {
        let configurator = configurator(View::Customize);
        let mut page = HtmlPage::new();
        configurator.initialize(&mut page);
        let html = page.into_document();

        assert!(html.contains(r#"<input type="hidden" name="changed" value="">"#));
        assert!(html.contains("this.form.changed.value='type';this.form.submit()"));
        assert!(html.contains("this.form.changed.value='size';this.form.submit()"));
    }
}
