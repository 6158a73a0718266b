//! Centralized theming for the TUI
//!
//! Single source of truth for all colors and styles used throughout
//! the application.

use ratatui::style::{Color, Modifier, Style};
use std::sync::RwLock;

use crate::config::ThemeVariant;

/// Global theme variant storage (RwLock allows runtime theme switching)
static THEME_VARIANT: RwLock<ThemeVariant> = RwLock::new(ThemeVariant::Dark);

/// Initialize the theme variant (call once at startup)
pub fn init_theme(variant: ThemeVariant) {
    if let Ok(mut guard) = THEME_VARIANT.write() {
        *guard = variant;
    }
}

/// Get the current theme variant
pub fn current_theme() -> ThemeVariant {
    THEME_VARIANT.read().map(|g| *g).unwrap_or_default()
}

/// Color palette - colors that vary by theme
pub mod colors {
    use super::*;

    pub fn bg_status() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::DarkGray,
            ThemeVariant::HighContrast => Color::Black,
        }
    }

    pub fn bg_error() -> Color {
        Color::Red
    }

    pub fn bg_selection() -> Color {
        Color::LightBlue
    }

    pub fn fg_primary() -> Color {
        Color::White
    }

    pub fn fg_muted() -> Color {
        Color::Gray
    }

    pub fn fg_accent() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Cyan,
            ThemeVariant::HighContrast => Color::LightCyan,
        }
    }

    pub fn fg_warning() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Yellow,
            ThemeVariant::HighContrast => Color::LightYellow,
        }
    }

    pub fn border() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::DarkGray,
            ThemeVariant::HighContrast => Color::Gray,
        }
    }

    pub fn border_focused() -> Color {
        match current_theme() {
            ThemeVariant::Dark => Color::Cyan,
            ThemeVariant::HighContrast => Color::LightCyan,
        }
    }
}

/// Pre-composed styles for common UI elements
pub struct Theme;

impl Theme {
    pub fn text() -> Style {
        Style::default().fg(colors::fg_primary())
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors::fg_muted())
    }

    pub fn text_accent() -> Style {
        Style::default().fg(colors::fg_accent())
    }

    /// Loading spinner and in-flight status text
    pub fn text_loading() -> Style {
        Style::default().fg(colors::fg_warning())
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(colors::bg_selection())
            .fg(colors::fg_primary())
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::fg_primary())
    }

    pub fn error_bar() -> Style {
        Style::default()
            .bg(colors::bg_error())
            .fg(colors::fg_primary())
    }

    pub fn help_key() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::fg_warning())
    }

    pub fn help_desc() -> Style {
        Style::default()
            .bg(colors::bg_status())
            .fg(colors::fg_muted())
    }

    pub fn border() -> Style {
        Style::default().fg(colors::border())
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors::border_focused())
    }

    pub fn label() -> Style {
        Style::default()
            .fg(colors::fg_muted())
            .add_modifier(Modifier::BOLD)
    }
}
