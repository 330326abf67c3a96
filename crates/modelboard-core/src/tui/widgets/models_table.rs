//! Model library table.
//! Thin TUI wrapper over [`crate::view::models::build_models_view`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::models::build_models_view;

pub fn render_models_table(frame: &mut Frame, area: Rect, state: &AppState) {
    let vm = build_models_view(&state.table).table;

    let block = Block::default()
        .title(vm.title)
        .borders(Borders::ALL)
        .style(Styles::default());

    if vm.rows.is_empty() {
        let message = if state.table.records().is_empty() {
            "No models yet"
        } else {
            "No models match the search"
        };
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    // Header with sort indicator and cursor
    let cursor = state.header_cursor.index();
    let headers: Vec<Cell> = vm
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let indicator = match h.sorted_ascending {
                Some(true) => "▲",
                Some(false) => "▼",
                None if h.sortable => "↕",
                None => "",
            };
            let style = if i == cursor {
                Styles::header_cursor()
            } else {
                Styles::table_header()
            };
            Cell::from(Span::styled(format!("{}{}", h.label, indicator), style))
        })
        .collect();
    let header = Row::new(headers).style(Styles::table_header()).height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|vr| {
            let cells = vr.cells.iter().map(|c| match c.style {
                Some(s) => Span::styled(c.text.clone(), Styles::from_class(s)),
                None => Span::raw(c.text.clone()),
            });
            Row::new(cells)
                .style(Styles::from_class(vr.style))
                .height(1)
        })
        .collect();

    // Description column takes the remaining width.
    let constraints: Vec<Constraint> = vm
        .widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            if i == 2 {
                Constraint::Min(w)
            } else {
                Constraint::Length(w)
            }
        })
        .collect();

    let table = Table::new(rows, constraints)
        .header(header)
        .block(block)
        .column_spacing(1);

    frame.render_widget(table, area);
}
