//! TUI widgets for the model console.

mod create_model;
mod footer;
mod header;
mod help;
mod models_table;
mod notices;
mod pagination;
mod quit_confirm;
mod search_bar;
mod sidebar;

pub use create_model::render_create_model;
pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use models_table::render_models_table;
pub use notices::render_notices;
pub use pagination::render_pagination;
pub use quit_confirm::render_quit_confirm;
pub use search_bar::render_search_bar;
pub use sidebar::{render_sidebar, sidebar_width};

use ratatui::layout::Rect;

/// `pct` percent of `len`, computed wide so large terminals cannot overflow.
pub(crate) fn percent(len: u16, pct: u16) -> u16 {
    (u32::from(len) * u32::from(pct) / 100) as u16
}

/// Rect of `width` x `height` centered in `area`, shrunk to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_wide_terminal() {
        assert_eq!(percent(80, 60), 48);
        assert_eq!(percent(2000, 60), 1200);
        assert_eq!(percent(u16::MAX, 80), 52428);
    }

    #[test]
    fn centered_shrinks_to_area() {
        let area = Rect::new(0, 0, 2000, 10);
        let popup = centered(area, percent(area.width, 60).clamp(44, 72), 30);
        assert_eq!(popup, Rect::new(964, 0, 72, 10));
    }
}
