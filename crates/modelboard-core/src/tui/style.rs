//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::notice::NoticeLevel;
use crate::view::common::RowStyleClass;

/// Console color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SIDEBAR_ACTIVE_BG: Color = Color::Indexed(61);

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Highlight colors
    pub const ACCENT: Color = Color::Cyan;
    pub const ACTIVE: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header cell under the cursor.
    pub fn header_cursor() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Current page button.
    pub fn page_current() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted sidebar entry.
    pub fn sidebar_active() -> Style {
        Style::default()
            .fg(Theme::FG)
            .bg(Theme::SIDEBAR_ACTIVE_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Popup border style.
    pub fn popup_border() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Focused form field.
    pub fn field_focused() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Status message style (yellow).
    pub fn status() -> Style {
        Style::default().fg(Theme::WARNING)
    }

    /// Error text style.
    pub fn error() -> Style {
        Style::default().fg(Theme::ERROR)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Search input style.
    pub fn search_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Section header style for popups and the sidebar.
    pub fn section_header() -> Style {
        Style::default()
            .fg(Theme::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::WARNING)
    }

    /// Toast style by notice level.
    pub fn notice(level: NoticeLevel) -> Style {
        match level {
            NoticeLevel::Success => Style::default().fg(Theme::ACTIVE),
            NoticeLevel::Error => Style::default().fg(Theme::ERROR),
        }
    }

    /// Maps a UI-agnostic [`RowStyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: RowStyleClass) -> Style {
        match class {
            RowStyleClass::Normal => Self::default(),
            RowStyleClass::Active => Style::default().fg(Theme::ACTIVE),
            RowStyleClass::Dimmed => Style::default().fg(Theme::FG_DIM),
            RowStyleClass::Accent => Style::default().fg(Theme::ACCENT),
        }
    }
}
