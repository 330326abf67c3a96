//! Header widget showing the console title, clock and status.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(22), // Title
        Constraint::Length(10), // Mode
        Constraint::Min(10),    // Status
        Constraint::Length(21), // Time
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(" AI/ML Model Builder").style(Styles::header()),
        chunks[0],
    );

    let mode = match state.input_mode {
        InputMode::Normal => " BROWSE ",
        InputMode::Search => " SEARCH ",
    };
    frame.render_widget(Paragraph::new(mode).style(Styles::header()), chunks[1]);

    let status = Paragraph::new(state.status_message.as_deref().unwrap_or(""))
        .style(Styles::header().patch(Styles::status()));
    frame.render_widget(status, chunks[2]);

    let time_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    frame.render_widget(
        Paragraph::new(format!("{} ", time_str)).style(Styles::header()),
        chunks[3],
    );
}
