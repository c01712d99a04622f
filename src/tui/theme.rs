//! Terminal color themes.
//!
//! The palette follows the team colors (green and yellow) and comes in a dark
//! and a light variant. [`Theme::from_mode`] maps the configured
//! [`ThemeMode`] to a palette, asking the OS when the mode is `Auto`.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;

/// Semantic colors for the configurator UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders and titles
    pub primary: Color,
    /// Focus ring and the active tab
    pub accent: Color,
    /// Notices after a successful action
    pub success: Color,
    /// Body text
    pub text: Color,
    /// Help text, placeholders, and disabled controls
    pub text_muted: Color,
    /// Window background
    pub background: Color,
    /// Background of the highlighted row in popups
    pub highlight_bg: Color,
}

impl Theme {
    /// Picks the palette matching the OS appearance, dark when unknown.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a configured mode to a palette.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Palette for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Green,
            accent: Color::Yellow,
            success: Color::LightGreen,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
            highlight_bg: Color::Rgb(0, 70, 40),
        }
    }

    /// Palette for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(21, 71, 52), // Duck green
            accent: Color::Rgb(170, 120, 0), // darkened yellow, readable on white
            success: Color::Rgb(0, 120, 0),
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
            highlight_bg: Color::Rgb(254, 225, 35),
        }
    }

    /// Style for a control: accent when focused, muted when disabled.
    #[must_use]
    pub fn control_style(&self, focused: bool, enabled: bool) -> Style {
        if !enabled {
            Style::default().fg(self.text_muted)
        } else if focused {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_light_accent_is_not_plain_yellow() {
        assert_ne!(Theme::light().accent, Color::Yellow);
        assert_eq!(Theme::light().background, Color::White);
    }

    #[test]
    fn test_control_style_precedence() {
        let theme = Theme::dark();
        assert_eq!(theme.control_style(true, false).fg, Some(theme.text_muted));
        assert_eq!(theme.control_style(true, true).fg, Some(theme.accent));
        assert_eq!(theme.control_style(false, true).fg, Some(theme.text));
    }
}
