//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::{AppState, PopupState};
use super::widgets::{
    render_create_model, render_footer, render_header, render_help, render_models_table,
    render_notices, render_pagination, render_quit_confirm, render_search_bar, render_sidebar,
    sidebar_width,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Main layout: header, body, footer
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(8),    // Sidebar + content
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    render_header(frame, chunks[0], state);

    let body = Layout::horizontal([
        Constraint::Length(sidebar_width(state.sidebar_open)),
        Constraint::Min(20),
    ])
    .split(chunks[1]);

    render_sidebar(frame, body[0], state.sidebar_open);

    let content = Layout::vertical([
        Constraint::Length(3), // Search box + create button
        Constraint::Min(4),    // Table
        Constraint::Length(1), // Pagination
    ])
    .split(body[1]);

    render_search_bar(frame, content[0], state);
    render_models_table(frame, content[1], state);
    render_pagination(frame, content[2], &state.table);

    render_footer(frame, chunks[2], state);

    // Popups (rendered last to overlay everything)
    match &state.popup {
        PopupState::CreateModel(form) => render_create_model(frame, area, form),
        PopupState::Help { scroll } => render_help(frame, area, *scroll),
        PopupState::QuitConfirm | PopupState::None => {}
    }

    render_notices(frame, area, &state.notices);

    // Quit confirmation popup (rendered last to overlay everything)
    if matches!(state.popup, PopupState::QuitConfirm) {
        render_quit_confirm(frame, area);
    }
}
