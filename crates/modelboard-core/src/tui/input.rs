//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::columns::ColumnKey;

use super::state::{AppState, InputMode, PopupState};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Submit the create-model modal (needs the app's sink).
    SubmitModel,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    // Any key dismisses a stale status message.
    state.status_message = None;

    match state.popup {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Help { .. } => return handle_help(state, key),
        PopupState::CreateModel(_) => return handle_create_model(state, key),
        PopupState::None => {}
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Search => handle_search_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::Help { scroll } = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
            state.popup = PopupState::None;
        }
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
        KeyCode::PageDown => *scroll = scroll.saturating_add(10),
        _ => {}
    }
    KeyAction::None
}

fn handle_create_model(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::CreateModel(form) = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Esc => {
            form.cancel();
            state.popup = PopupState::None;
        }
        KeyCode::Enter => return KeyAction::SubmitModel,
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::SubmitModel;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Right => form.cycle_option(true),
        KeyCode::Left => form.cycle_option(false),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => {
            // Ignore control/alt-modified chars
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                form.input_char(c);
            }
        }
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Search box
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Search;
            state.search_input = state.table.search_term().to_string();
            KeyAction::None
        }

        // Header cursor and sorting
        KeyCode::Left | KeyCode::Char('h') => {
            state.move_header_cursor(false);
            KeyAction::None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.move_header_cursor(true);
            KeyAction::None
        }
        KeyCode::Enter | KeyCode::Char('s') => {
            state.sort_by(state.header_cursor);
            KeyAction::None
        }
        KeyCode::Char(c @ '1'..='7') => {
            let index = c as usize - '1' as usize;
            if let Some(column) = ColumnKey::from_index(index) {
                state.sort_by(column);
            }
            KeyAction::None
        }

        // Pagination
        KeyCode::PageDown | KeyCode::Char('n') | KeyCode::Char(']') => {
            state.table.next_page();
            KeyAction::None
        }
        KeyCode::PageUp | KeyCode::Char('p') | KeyCode::Char('[') => {
            state.table.prev_page();
            KeyAction::None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.table.go_to_page(1);
            KeyAction::None
        }
        KeyCode::End | KeyCode::Char('G') => {
            let last = state.table.total_pages();
            state.table.go_to_page(last);
            KeyAction::None
        }

        // Create model modal
        KeyCode::Char('c') | KeyCode::Char('+') => {
            state.open_create_form();
            KeyAction::None
        }

        // Sidebar
        KeyCode::Char('b') => {
            state.sidebar_open = !state.sidebar_open;
            KeyAction::None
        }

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

/// Handles keys while typing into the search box.
fn handle_search_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            // Cancel search
            state.input_mode = InputMode::Normal;
            state.search_input.clear();
            state.table.clear_search();
            KeyAction::None
        }
        KeyCode::Enter => {
            // Search is already applied in real-time, just switch mode
            state.input_mode = InputMode::Normal;
            KeyAction::None
        }
        KeyCode::Backspace => {
            state.search_input.pop();
            state.apply_search_input();
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char(c) => {
            state.search_input.push(c);
            state.apply_search_input();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}
