//! Collapsible navigation sidebar.
//!
//! Entries are display-only; the console has a single page.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::style::Styles;

struct MenuSection {
    title: &'static str,
    items: &'static [MenuItem],
}

struct MenuItem {
    name: &'static str,
    /// The entry for the current page.
    current: bool,
}

const MENU: &[MenuSection] = &[
    MenuSection {
        title: "Model Library",
        items: &[MenuItem {
            name: "Model Library",
            current: true,
        }],
    },
    MenuSection {
        title: "Extraction Builder",
        items: &[
            MenuItem {
                name: "Label Data",
                current: false,
            },
            MenuItem {
                name: "Model",
                current: false,
            },
            MenuItem {
                name: "Test",
                current: false,
            },
        ],
    },
    MenuSection {
        title: "Help",
        items: &[
            MenuItem {
                name: "Setting",
                current: false,
            },
            MenuItem {
                name: "Support",
                current: false,
            },
        ],
    },
];

/// Width of the sidebar column.
pub fn sidebar_width(open: bool) -> u16 {
    if open { 24 } else { 5 }
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, open: bool) {
    let mut lines: Vec<Line> = Vec::new();

    for section in MENU {
        if open {
            lines.push(Line::from(Span::styled(
                section.title,
                Styles::section_header(),
            )));
        }
        for item in section.items {
            let style = if item.current {
                Styles::sidebar_active()
            } else {
                Styles::default()
            };
            let text = if open {
                format!(" {}", item.name)
            } else {
                // Collapsed: first letter only
                format!(" {}", item.name.chars().next().unwrap_or(' '))
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
        lines.push(Line::from(""));
    }

    let title = if open { " Aventisia " } else { " A " };
    let block = Block::default()
        .title(title)
        .borders(Borders::RIGHT)
        .style(Styles::default());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
