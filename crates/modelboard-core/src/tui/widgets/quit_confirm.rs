//! Quit confirmation popup widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered;
use crate::tui::style::Styles;

fn choice(keys: [&'static str; 2], what: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(keys[0], Styles::help_key()),
        Span::styled(" or ", Styles::dim()),
        Span::styled(keys[1], Styles::help_key()),
        Span::styled(what, Styles::dim()),
    ])
}

/// Renders a centered quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup_area = centered(area, (area.width / 2).clamp(36, 56), 7);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Exit modelboard ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = vec![
        Line::from("Leave the model library?"),
        Line::from(""),
        choice(["Enter", "q"], " → quit"),
        choice(["Esc", "n"], " → stay"),
    ];

    frame.render_widget(
        Paragraph::new(content)
            .alignment(Alignment::Center)
            .style(Styles::default()),
        inner,
    );
}
