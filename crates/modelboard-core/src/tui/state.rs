//! Application state management.

use chrono::Utc;

use crate::columns::ColumnKey;
use crate::form::{CreateModelForm, ModelSink, SubmitOutcome};
use crate::notice::NoticeLog;
use crate::table::TableViewModel;

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search box; the term is applied on every keystroke.
    Search,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
    /// Create-model modal.
    CreateModel(CreateModelForm),
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Main application state.
///
/// The hosting [`App`](super::App) owns this value; widgets receive it by
/// reference and never keep state of their own.
#[derive(Debug)]
pub struct AppState {
    /// Table view-model with search, sort and page state.
    pub table: TableViewModel,
    /// Input mode.
    pub input_mode: InputMode,
    /// Search input buffer.
    pub search_input: String,
    /// Column under the header cursor (sort target).
    pub header_cursor: ColumnKey,
    /// Whether the sidebar is expanded.
    pub sidebar_open: bool,
    /// Active popup state. Only one popup can be open at a time.
    pub popup: PopupState,
    /// Toast notices raised by the form.
    pub notices: NoticeLog,
    /// Temporary status message shown in the header (e.g., why an action was blocked).
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(table: TableViewModel) -> Self {
        Self {
            table,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            header_cursor: ColumnKey::ModelName,
            sidebar_open: true,
            popup: PopupState::None,
            notices: NoticeLog::default(),
            status_message: None,
        }
    }

    /// Applies the search buffer to the table.
    pub fn apply_search_input(&mut self) {
        self.table.set_search_term(self.search_input.clone());
    }

    pub fn move_header_cursor(&mut self, forward: bool) {
        let count = ColumnKey::all().len();
        let idx = self.header_cursor.index();
        let next = if forward {
            (idx + 1) % count
        } else {
            (idx + count - 1) % count
        };
        if let Some(key) = ColumnKey::from_index(next) {
            self.header_cursor = key;
        }
    }

    /// Sorts by `column`, reporting unsortable columns in the status line.
    pub fn sort_by(&mut self, column: ColumnKey) {
        self.header_cursor = column;
        if column.is_sortable() {
            self.table.sort_by(column);
        } else {
            self.status_message = Some(format!("{} column is not sortable", column.spec().label));
        }
    }

    /// Opens a fresh create-model modal.
    pub fn open_create_form(&mut self) {
        self.popup = PopupState::CreateModel(CreateModelForm::new());
    }

    /// Submits the open create-model modal, closing it on success.
    /// Returns `None` if no modal is open.
    pub fn submit_create_form(&mut self, sink: &mut dyn ModelSink) -> Option<SubmitOutcome> {
        let PopupState::CreateModel(form) = &mut self.popup else {
            return None;
        };
        let outcome = form.submit(sink, &mut self.notices)?;
        if !form.is_open() {
            self.popup = PopupState::None;
        }
        Some(outcome)
    }

    /// Drops expired notices.
    pub fn tick(&mut self) {
        self.notices.expire(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{DraftField, RecordingSink};
    use crate::seed::generate_models;

    fn state() -> AppState {
        AppState::new(TableViewModel::new(generate_models(20)))
    }

    #[test]
    fn header_cursor_wraps() {
        let mut s = state();
        s.move_header_cursor(false);
        assert_eq!(s.header_cursor, ColumnKey::Action);
        s.move_header_cursor(true);
        assert_eq!(s.header_cursor, ColumnKey::ModelName);
    }

    #[test]
    fn unsortable_column_sets_status() {
        let mut s = state();
        s.sort_by(ColumnKey::Action);
        assert_eq!(s.table.sort_column(), None);
        assert!(s.status_message.is_some());
    }

    #[test]
    fn submit_without_modal_is_none() {
        let mut s = state();
        let mut sink = RecordingSink::default();
        assert_eq!(s.submit_create_form(&mut sink), None);
    }

    #[test]
    fn accepted_submit_closes_modal() {
        let mut s = state();
        let mut sink = RecordingSink::default();
        s.open_create_form();
        if let PopupState::CreateModel(form) = &mut s.popup {
            form.set_field(DraftField::ModelName, "Invoices");
            form.set_field(DraftField::ModelType, "Extraction");
            form.set_field(DraftField::Llm, "Neural");
            form.set_field(DraftField::ModelDescription, "Reads invoices");
        }
        let outcome = s.submit_create_form(&mut sink);
        assert_eq!(outcome, Some(SubmitOutcome::Accepted));
        assert!(!s.popup.is_open());
        assert_eq!(sink.created.len(), 1);
        assert_eq!(s.notices.len(), 1);
    }

    #[test]
    fn rejected_submit_keeps_modal_open() {
        let mut s = state();
        let mut sink = RecordingSink::default();
        s.open_create_form();
        let outcome = s.submit_create_form(&mut sink).unwrap();
        assert_eq!(outcome.errors().len(), 4);
        assert!(matches!(s.popup, PopupState::CreateModel(_)));
        assert_eq!(s.notices.len(), 4);
    }
}
