//! Color palettes for the workbench UI.
//!
//! One palette per theme; the render functions look colors up here so
//! nothing else needs to match on the theme.

use ratatui::style::Color;

use crate::config::Theme;

/// Resolved colors for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Default border color.
    pub border: Color,
    /// Border of the focused pane.
    pub border_focused: Color,
    /// Ordinary text.
    pub text: Color,
    /// De-emphasized text (hints, placeholders, scroll markers).
    pub dim: Color,
    /// Highlights: active tab, selected row, title.
    pub accent: Color,
    /// Background of the selected row.
    pub selection_bg: Color,
    /// Success toasts and markers.
    pub success: Color,
    /// Error toasts and the Errors tab.
    pub error: Color,
    /// Warning toasts and lint flags.
    pub warning: Color,
    /// Info toasts.
    pub info: Color,
    /// Background for modal dialogs.
    pub dialog_bg: Color,
    /// Background for the whole frame.
    pub background: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            border: Color::DarkGray,
            border_focused: Color::White,
            text: Color::White,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            selection_bg: Color::Rgb(40, 40, 55),
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            dialog_bg: Color::Rgb(10, 15, 35),
            background: Color::Reset,
        }
    }

    pub fn light() -> Self {
        Self {
            border: Color::Gray,
            border_focused: Color::Black,
            text: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            selection_bg: Color::Rgb(215, 225, 245),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(160, 110, 0),
            info: Color::Blue,
            dialog_bg: Color::Rgb(235, 238, 245),
            background: Color::White,
        }
    }
}
