//! Toast notices in the top-right corner.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::notice::{NoticeLevel, NoticeLog};
use crate::tui::style::Styles;

const TOAST_WIDTH: u16 = 40;

/// Stacks the live notices below the header, newest at the bottom.
pub fn render_notices(frame: &mut Frame, area: Rect, notices: &NoticeLog) {
    let width = TOAST_WIDTH.min(area.width);
    let mut y = area.y + 1;
    for notice in notices.iter() {
        if y + 3 > area.y + area.height {
            break;
        }
        let rect = Rect::new(area.x + area.width - width, y, width, 3);
        let title = match notice.level {
            NoticeLevel::Success => " ✓ ",
            NoticeLevel::Error => " ✗ ",
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(notice.text.as_str())
                .style(Styles::notice(notice.level))
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_style(Styles::notice(notice.level)),
                ),
            rect,
        );
        y += 3;
    }
}
