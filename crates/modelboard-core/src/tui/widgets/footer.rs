//! Key hint line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode, PopupState};
use crate::tui::style::Styles;

fn hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
    match (&state.popup, state.input_mode) {
        (PopupState::CreateModel(_), _) => &[
            ("Tab", "next field"),
            ("←/→", "choose"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ],
        (PopupState::Help { .. }, _) => &[("↑/↓", "scroll"), ("Esc", "close")],
        (PopupState::QuitConfirm, _) => &[],
        (PopupState::None, InputMode::Search) => &[("Enter", "done"), ("Esc", "clear")],
        (PopupState::None, InputMode::Normal) => &[
            ("/", "search"),
            ("←/→", "column"),
            ("Enter", "sort"),
            ("n/p", "page"),
            ("c", "create model"),
            ("b", "sidebar"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}

/// Renders the bottom line with keys available in the current mode.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let spans: Vec<Span> = hints(state)
        .iter()
        .flat_map(|(key, what)| {
            [
                Span::styled(format!(" {}", key), Styles::help_key()),
                Span::styled(format!(" {} ", what), Styles::dim()),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
