//! Help popup with the key reference.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::{centered, percent};
use crate::tui::style::Styles;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Table",
        &[
            ("/", "search by name or id"),
            ("←/→ h/l", "move header cursor"),
            ("Enter s", "sort by column under cursor"),
            ("1-7", "sort by column number"),
            ("n ] PgDn", "next page"),
            ("p [ PgUp", "previous page"),
            ("g / G", "first / last page"),
        ],
    ),
    (
        "Create model",
        &[
            ("c +", "open the form"),
            ("Tab ↑/↓", "move between fields"),
            ("←/→", "change a select field"),
            ("Enter", "submit"),
            ("Esc", "cancel"),
        ],
    ),
    (
        "General",
        &[
            ("b", "toggle sidebar"),
            ("? F1", "this help"),
            ("q", "quit"),
        ],
    ),
];

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, keys) in SECTIONS {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*title, Styles::section_header())));
        for (key, what) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<10}", key), Styles::help_key()),
                Span::raw(*what),
            ]));
        }
    }
    lines
}

/// Renders the help popup centered on screen, scrolled by `scroll` lines.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: usize) {
    let popup_area = centered(
        area,
        percent(area.width, 60).clamp(40, 70),
        percent(area.height, 80).clamp(10, 28),
    );
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let content = help_lines();
    let max_scroll = content.len().saturating_sub(chunks[0].height as usize);
    let scroll = scroll.min(max_scroll);

    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .scroll((scroll as u16, 0))
            .style(Styles::default()),
        chunks[0],
    );

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" close ", Styles::dim()),
            Span::styled("↑/↓", Styles::help_key()),
            Span::styled(" scroll", Styles::dim()),
            Span::styled(scroll_info, Styles::dim()),
        ])),
        chunks[1],
    );
}
