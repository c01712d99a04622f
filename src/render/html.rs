//! HTML fragments for the display, summary, and gallery regions.
//!
//! Markup classes follow the stylesheet served by the web front end
//! (`product-image`, `placeholder`, `summary-item`, `gallery-item`). Every
//! interpolated value is escaped.

use std::fmt::Write;

use super::{DisplayContent, GalleryCard, SelectOption, SummaryContent};

/// Escapes text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `onerror` handler that swaps in `fallback` once, then detaches itself.
fn onerror_attr(fallback: &str) -> String {
    // The fallback lands inside a JS string inside an HTML attribute.
    let js = fallback.replace('\\', "\\\\").replace('\'', "\\'");
    format!(
        r#"onerror="this.onerror=null;this.src='{}'""#,
        escape(&js)
    )
}

/// Renders the display area.
#[must_use]
pub fn display_fragment(content: &DisplayContent) -> String {
    match content {
        DisplayContent::Image { src, alt, fallback } => format!(
            r#"<img src="{}" alt="{}" class="product-image" {}>"#,
            escape(src),
            escape(alt),
            onerror_attr(fallback)
        ),
        DisplayContent::Placeholder { message } => format!(
            r#"<div class="placeholder"><p>{}</p></div>"#,
            escape(message)
        ),
    }
}

/// Renders the summary area.
#[must_use]
pub fn summary_fragment(content: &SummaryContent) -> String {
    match content {
        SummaryContent::Items { items } => {
            let mut html = String::new();
            for item in items {
                let _ = write!(
                    html,
                    r#"<div class="summary-item"><strong>{}:</strong> {}</div>"#,
                    escape(&item.label),
                    escape(&item.value)
                );
            }
            html
        }
        SummaryContent::Empty { message } => format!("<p>{}</p>", escape(message)),
    }
}

/// Renders the gallery grid. `href` builds the link each card activates.
#[must_use]
pub fn gallery_fragment(cards: &[GalleryCard], href: impl Fn(&GalleryCard) -> String) -> String {
    let mut html = String::new();
    for card in cards {
        let _ = write!(
            html,
            concat!(
                r#"<a class="gallery-item" href="{href}" data-preset="{index}">"#,
                r#"<img src="{src}" alt="{alt}" {onerror}>"#,
                r#"<p>{title}</p>"#,
                r#"<p class="gallery-meta">{subtitle}</p>"#,
                "</a>"
            ),
            href = escape(&href(card)),
            index = card.index,
            src = escape(&card.image),
            alt = escape(&card.title),
            onerror = onerror_attr(&card.fallback),
            title = escape(&card.title),
            subtitle = escape(&card.subtitle),
        );
    }
    html
}

/// Renders `<option>` elements, marking `selected` as chosen.
#[must_use]
pub fn options_fragment(options: &[SelectOption], selected: &str) -> String {
    let mut html = String::new();
    for option in options {
        let marker = if option.value == selected { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{}"{marker}>{}</option>"#,
            escape(&option.value),
            escape(&option.label)
        );
    }
    html
}
