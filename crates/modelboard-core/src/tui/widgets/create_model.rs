//! Create-model modal.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::{centered, percent};
use crate::form::{CreateModelForm, DraftField};
use crate::tui::style::Styles;

fn field_line(form: &CreateModelForm, field: DraftField) -> Line<'static> {
    let focused = form.focus() == field;
    let value = match form.selected_label(field) {
        Some(label) => format!("‹ {} ›", label),
        None if focused => format!("{}█", form.draft().get(field)),
        None => form.draft().get(field).to_string(),
    };
    let marker = if focused { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, Styles::help_key()),
        Span::styled(format!("{:<13}", field.label()), Styles::dim()),
        Span::styled(
            value,
            if focused {
                Styles::field_focused()
            } else {
                Styles::default()
            },
        ),
    ])
}

/// Renders the modal centered over `area`.
pub fn render_create_model(frame: &mut Frame, area: Rect, form: &CreateModelForm) {
    let errors = form.errors();
    let height = 4 + 2 * DraftField::all().len() as u16 + errors.len() as u16 + 1;
    let popup_area = centered(area, percent(area.width, 60).clamp(44, 72), height);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Create New Model ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let mut lines = Vec::new();
    for field in DraftField::all() {
        lines.push(field_line(form, *field));
        lines.push(Line::from(""));
    }
    for error in errors {
        lines.push(Line::from(Span::styled(format!("  {}", error), Styles::error())));
    }
    frame.render_widget(Paragraph::new(lines).style(Styles::default()), chunks[0]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" create ", Styles::dim()),
            Span::styled("Tab", Styles::help_key()),
            Span::styled(" next ", Styles::dim()),
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" cancel", Styles::dim()),
        ])),
        chunks[1],
    );
}
