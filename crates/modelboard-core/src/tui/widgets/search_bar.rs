//! Search box and create button above the table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;

pub fn render_search_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([Constraint::Min(20), Constraint::Length(26)]).split(area);

    let (text, style) = match state.input_mode {
        InputMode::Search => (format!("{}█", state.search_input), Styles::search_input()),
        InputMode::Normal if state.table.search_term().is_empty() => {
            ("Search by Name, ID".to_string(), Styles::dim())
        }
        InputMode::Normal => (state.table.search_term().to_string(), Styles::default()),
    };
    let border = if state.input_mode == InputMode::Search {
        Styles::popup_border()
    } else {
        Styles::dim()
    };
    let search = Paragraph::new(Line::from(vec![
        Span::styled("/ ", Styles::help_key()),
        Span::styled(text, style),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(search, chunks[0]);

    let button = Paragraph::new(Line::from(vec![
        Span::styled(" c ", Styles::help_key()),
        Span::raw("Create New Model"),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::popup_border()),
    );
    frame.render_widget(button, chunks[1]);
}
