//! Pagination bar: "Showing X to Y of Z" and page buttons.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::table::TableViewModel;
use crate::tui::style::Styles;
use crate::view::models::build_models_view;

pub fn render_pagination(frame: &mut Frame, area: Rect, table: &TableViewModel) {
    let p = build_models_view(table).pagination;

    let chunks = Layout::horizontal([Constraint::Min(10), Constraint::Length(40)]).split(area);

    frame.render_widget(
        Paragraph::new(format!(" {}", p.summary)).style(Styles::dim()),
        chunks[0],
    );

    let arrow = |enabled: bool, glyph: &'static str| {
        Span::styled(
            glyph,
            if enabled {
                Styles::default()
            } else {
                Styles::dim()
            },
        )
    };

    let mut spans = vec![arrow(p.has_prev, "‹ ")];
    for page in &p.pages {
        let style = if *page == p.current {
            Styles::page_current()
        } else {
            Styles::default()
        };
        spans.push(Span::styled(format!(" {} ", page), style));
    }
    spans.push(arrow(p.has_next, " ›"));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Right),
        chunks[1],
    );
}
