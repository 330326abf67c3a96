//! UI-agnostic view model types.
//!
//! These types carry presentation data without depending on ratatui; the TUI
//! maps [`RowStyleClass`] to its own styles.

/// Row- or cell-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Positive state (TUI: green). E.g. an active model.
    Active,
    /// Dimmed (TUI: dark gray). E.g. an inactive model or an id.
    Dimmed,
    /// Accent (TUI: cyan).
    Accent,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

/// One table row, parameterized by entity ID type.
#[derive(Debug, Clone)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Column header with its sort marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHeader {
    pub label: String,
    pub sortable: bool,
    /// `Some(true)` ascending, `Some(false)` descending, `None` not sorted.
    pub sorted_ascending: Option<bool>,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone)]
pub struct TableView<Id> {
    pub title: String,
    pub headers: Vec<ViewHeader>,
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow<Id>>,
}
