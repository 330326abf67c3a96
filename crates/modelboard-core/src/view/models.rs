//! Model library view model.

use crate::columns::COLUMNS;
use crate::record::{ModelRecord, ModelStatus};
use crate::table::TableViewModel;
use crate::view::common::{RowStyleClass, TableView, ViewCell, ViewHeader, ViewRow};

/// Glyph shown in the action column.
const ACTION_GLYPH: &str = "⋮";

/// Pagination bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current: usize,
    pub pages: Vec<usize>,
    pub has_prev: bool,
    pub has_next: bool,
    /// "Showing X to Y of Z", or "No results".
    pub summary: String,
}

/// Everything the model library screen renders.
#[derive(Debug, Clone)]
pub struct ModelsView {
    pub table: TableView<String>,
    pub pagination: PaginationView,
}

fn build_row(record: &ModelRecord) -> ViewRow<String> {
    let status_style = match record.status {
        ModelStatus::Active => RowStyleClass::Active,
        ModelStatus::Inactive => RowStyleClass::Dimmed,
    };

    let cells = vec![
        ViewCell::plain(format!("{}  {}", record.display_name, record.id)),
        ViewCell::plain(record.model_type.clone()),
        ViewCell::plain(record.description.clone()),
        ViewCell::plain(record.created_on.clone()),
        ViewCell::plain(record.last_trained_on.clone()),
        ViewCell::styled(record.status.to_string(), status_style),
        ViewCell::styled(ACTION_GLYPH.to_string(), RowStyleClass::Dimmed),
    ];

    ViewRow {
        id: record.id.clone(),
        cells,
        style: RowStyleClass::Normal,
    }
}

/// Derives the render-ready table and pagination bar from the view-model.
pub fn build_models_view(vm: &TableViewModel) -> ModelsView {
    let page = vm.page();

    let headers = COLUMNS
        .iter()
        .map(|spec| ViewHeader {
            label: spec.label.to_string(),
            sortable: spec.sortable,
            sorted_ascending: (vm.sort_column() == Some(spec.key))
                .then(|| vm.sort_order().is_ascending()),
        })
        .collect();

    let rows = page.rows.iter().map(|r| build_row(r)).collect();

    let title = if vm.search_term().is_empty() {
        " Model Library ".to_string()
    } else {
        format!(" Model Library (search: {}) ", vm.search_term())
    };

    let summary = match page.showing_range() {
        Some((first, last)) => format!("Showing {} to {} of {}", first, last, page.total_items),
        None => "No results".to_string(),
    };

    ModelsView {
        table: TableView {
            title,
            headers,
            widths: COLUMNS.iter().map(|c| c.width).collect(),
            rows,
        },
        pagination: PaginationView {
            current: page.current_page,
            pages: (1..=page.total_pages).collect(),
            has_prev: page.current_page > 1,
            has_next: page.current_page < page.total_pages,
            summary,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::ColumnKey;
    use crate::seed::generate_models;

    #[test]
    fn first_page_view() {
        let vm = TableViewModel::new(generate_models(20));
        let view = build_models_view(&vm);

        assert_eq!(view.table.headers.len(), 7);
        assert_eq!(view.table.widths.len(), 7);
        assert!(!view.table.headers[6].sortable);
        assert!(view.table.headers.iter().all(|h| h.sorted_ascending.is_none()));

        assert_eq!(view.table.rows.len(), 5);
        let first = &view.table.rows[0];
        assert_eq!(first.id, "#5000001");
        assert_eq!(first.cells[0].text, "Model A  #5000001");
        assert_eq!(first.cells[5].text, "Inactive");
        assert_eq!(first.cells[5].style, Some(RowStyleClass::Dimmed));
        assert_eq!(
            view.table.rows[1].cells[5].style,
            Some(RowStyleClass::Active)
        );

        assert_eq!(view.pagination.pages, vec![1, 2, 3, 4]);
        assert_eq!(view.pagination.summary, "Showing 1 to 5 of 20");
        assert!(!view.pagination.has_prev);
        assert!(view.pagination.has_next);
    }

    #[test]
    fn sort_marker_follows_view_model() {
        let mut vm = TableViewModel::new(generate_models(20));
        vm.sort_by(ColumnKey::Status);
        vm.sort_by(ColumnKey::Status);
        let view = build_models_view(&vm);
        assert_eq!(view.table.headers[5].sorted_ascending, Some(false));
        assert_eq!(view.table.headers[0].sorted_ascending, None);
    }

    #[test]
    fn empty_search_result_view() {
        let mut vm = TableViewModel::new(generate_models(20));
        vm.set_search_term("zzz");
        let view = build_models_view(&vm);
        assert!(view.table.rows.is_empty());
        assert!(view.table.title.contains("zzz"));
        assert_eq!(view.pagination.pages, vec![1]);
        assert_eq!(view.pagination.summary, "No results");
        assert!(!view.pagination.has_next);
    }
}
