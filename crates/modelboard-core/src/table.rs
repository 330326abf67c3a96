//! Table view-model: search filter, sort and pagination over model records.
//!
//! The view-model owns the injected records and the transient table state.
//! Everything a frontend shows is derived on demand by [`TableViewModel::page`]
//! (or its thin wrappers) as filter → sort → paginate, with no cached rows.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;
use tracing::debug;

use crate::columns::ColumnKey;
use crate::record::ModelRecord;
use crate::util::locale_cmp;

/// Rows per page used by the console.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortOrder::Asc
    }
}

/// Error building a table view-model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Page size must be at least 1.
    ZeroPageSize,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ZeroPageSize => write!(f, "page size must be at least 1"),
        }
    }
}

impl std::error::Error for TableError {}

/// One derived page of the table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    pub rows: Vec<&'a ModelRecord>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl Page<'_> {
    /// 1-based positions of the first and last row shown, out of `total_items`.
    /// `None` when nothing matches.
    pub fn showing_range(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.page_size + 1;
        Some((first, first + self.rows.len() - 1))
    }
}

/// Searchable, sortable, paginated view over a fixed set of records.
#[derive(Debug, Clone)]
pub struct TableViewModel {
    records: Vec<ModelRecord>,
    search_term: String,
    sort_column: Option<ColumnKey>,
    sort_order: SortOrder,
    current_page: usize,
    page_size: usize,
}

impl TableViewModel {
    /// Creates a view-model with [`DEFAULT_PAGE_SIZE`].
    pub fn new(records: Vec<ModelRecord>) -> Self {
        Self {
            records,
            search_term: String::new(),
            sort_column: None,
            sort_order: SortOrder::Asc,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(records: Vec<ModelRecord>, page_size: usize) -> Result<Self, TableError> {
        if page_size == 0 {
            return Err(TableError::ZeroPageSize);
        }
        Ok(Self {
            page_size,
            ..Self::new(records)
        })
    }

    pub fn records(&self) -> &[ModelRecord] {
        &self.records
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_column(&self) -> Option<ColumnKey> {
        self.sort_column
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replaces the search term and goes back to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
        self.clamp_page();
        debug!(
            "search term set to {:?}: {} matches",
            self.search_term,
            self.total_items()
        );
    }

    pub fn clear_search(&mut self) {
        self.set_search_term(String::new());
    }

    /// Sorts by `column`, toggling the order when it is already the sort
    /// column. Unsortable columns are ignored. The current page is kept.
    pub fn sort_by(&mut self, column: ColumnKey) {
        if !column.is_sortable() {
            debug!("ignoring sort on unsortable column {}", column);
            return;
        }
        if self.sort_column == Some(column) {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_column = Some(column);
            self.sort_order = SortOrder::Asc;
        }
        debug!("sorting by {} {:?}", column, self.sort_order);
    }

    /// Moves to `page`. Pages outside `1..=total_pages()` are ignored.
    pub fn go_to_page(&mut self, page: usize) {
        if page < 1 || page > self.total_pages() {
            return;
        }
        self.current_page = page;
        debug!("page {} of {}", page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page - 1);
    }

    /// Number of records matching the search term.
    pub fn total_items(&self) -> usize {
        self.filtered().len()
    }

    /// Number of pages, never less than 1 so an empty result still has a page.
    pub fn total_pages(&self) -> usize {
        Self::pages_for(self.total_items(), self.page_size)
    }

    /// Page numbers for the pagination buttons.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    /// Records on the current page, filtered and sorted.
    pub fn visible_rows(&self) -> Vec<&ModelRecord> {
        self.page().rows
    }

    /// See [`Page::showing_range`].
    pub fn showing_range(&self) -> Option<(usize, usize)> {
        self.page().showing_range()
    }

    /// Runs the full pipeline once and returns the current page with its
    /// pagination metadata.
    pub fn page(&self) -> Page<'_> {
        let ordered = self.ordered();
        let total_items = ordered.len();
        let start = (self.current_page - 1) * self.page_size;
        let rows = ordered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        Page {
            rows,
            current_page: self.current_page,
            total_pages: Self::pages_for(total_items, self.page_size),
            total_items,
            page_size: self.page_size,
        }
    }

    fn pages_for(total_items: usize, page_size: usize) -> usize {
        total_items.div_ceil(page_size).max(1)
    }

    fn filtered(&self) -> Vec<&ModelRecord> {
        let needle = self.search_term.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.matches_search(&needle))
            .collect()
    }

    /// Filtered records in sort order. Descending is the reversed ascending
    /// sequence, so records with equal keys also swap relative order.
    fn ordered(&self) -> Vec<&ModelRecord> {
        let mut rows = self.filtered();
        let Some(column) = self.sort_column else {
            return rows;
        };
        let spec = column.spec();
        rows.sort_by(|a, b| {
            locale_cmp(
                spec.value(a).unwrap_or_default(),
                spec.value(b).unwrap_or_default(),
            )
        });
        if self.sort_order == SortOrder::Desc {
            rows.reverse();
        }
        rows
    }

    fn clamp_page(&mut self) {
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ModelStatus;
    use crate::seed::generate_models;

    fn seeded() -> TableViewModel {
        TableViewModel::new(generate_models(20))
    }

    fn ids(rows: &[&ModelRecord]) -> Vec<String> {
        rows.iter().map(|r| r.id.clone()).collect()
    }

    fn record(name: &str, id: &str, status: ModelStatus) -> ModelRecord {
        ModelRecord {
            display_name: name.to_string(),
            id: id.to_string(),
            model_type: "Extraction".to_string(),
            description: format!("Description for {}", name),
            created_on: "29/02/2024".to_string(),
            last_trained_on: "29/02/2024".to_string(),
            status,
        }
    }

    /// Full ordered sequence across all pages.
    fn all_pages(vm: &mut TableViewModel) -> Vec<String> {
        let mut out = Vec::new();
        for page in vm.page_numbers() {
            vm.go_to_page(page);
            out.extend(ids(&vm.visible_rows()));
        }
        vm.go_to_page(1);
        out
    }

    #[test]
    fn seeded_first_page_in_insertion_order() {
        let vm = seeded();
        assert_eq!(vm.total_items(), 20);
        assert_eq!(vm.total_pages(), 4);
        assert_eq!(
            ids(&vm.visible_rows()),
            vec!["#5000001", "#5000002", "#5000003", "#5000004", "#5000005"]
        );
        assert_eq!(vm.showing_range(), Some((1, 5)));
    }

    #[test]
    fn search_matches_name_or_id_case_insensitively() {
        let mut vm = seeded();
        vm.set_search_term("MODEL B");
        let rows = vm.visible_rows();
        assert_eq!(ids(&rows), vec!["#5000002"]);

        vm.set_search_term("500001");
        assert_eq!(vm.total_items(), 10); // #5000010..#5000019
        for r in vm.visible_rows() {
            assert!(r.id.contains("500001"));
        }

        vm.set_search_term("");
        assert_eq!(vm.total_items(), 20);
    }

    #[test]
    fn search_does_not_match_other_columns() {
        let mut vm = seeded();
        vm.set_search_term("extraction");
        assert_eq!(vm.total_items(), 0);
        vm.set_search_term("description");
        assert_eq!(vm.total_items(), 0);
    }

    #[test]
    fn search_resets_page() {
        let mut vm = seeded();
        vm.go_to_page(3);
        assert_eq!(vm.current_page(), 3);
        vm.set_search_term("model");
        assert_eq!(vm.current_page(), 1);
    }

    #[test]
    fn zero_match_search_is_one_empty_page() {
        let mut vm = seeded();
        vm.set_search_term("no such model");
        assert_eq!(vm.total_items(), 0);
        assert_eq!(vm.total_pages(), 1);
        assert!(vm.visible_rows().is_empty());
        assert_eq!(vm.showing_range(), None);

        vm.go_to_page(2);
        vm.next_page();
        vm.prev_page();
        assert_eq!(vm.current_page(), 1);
    }

    #[test]
    fn go_to_page_ignores_out_of_range() {
        let mut vm = seeded();
        vm.go_to_page(2);
        for page in [0, 5, 100, usize::MAX] {
            vm.go_to_page(page);
            assert_eq!(vm.current_page(), 2);
        }
        vm.go_to_page(4);
        assert_eq!(vm.current_page(), 4);
        assert_eq!(vm.showing_range(), Some((16, 20)));
    }

    #[test]
    fn next_and_prev_stop_at_bounds() {
        let mut vm = seeded();
        vm.prev_page();
        assert_eq!(vm.current_page(), 1);
        for _ in 0..10 {
            vm.next_page();
        }
        assert_eq!(vm.current_page(), 4);
        vm.prev_page();
        assert_eq!(vm.current_page(), 3);
    }

    #[test]
    fn last_partial_page() {
        let mut vm = TableViewModel::new(generate_models(12));
        assert_eq!(vm.total_pages(), 3);
        vm.go_to_page(3);
        assert_eq!(ids(&vm.visible_rows()), vec!["#5000011", "#5000012"]);
        assert_eq!(vm.showing_range(), Some((11, 12)));
    }

    #[test]
    fn sort_toggles_and_resets_on_new_column() {
        let mut vm = seeded();
        vm.sort_by(ColumnKey::Status);
        assert_eq!(vm.sort_column(), Some(ColumnKey::Status));
        assert_eq!(vm.sort_order(), SortOrder::Asc);
        vm.sort_by(ColumnKey::Status);
        assert_eq!(vm.sort_order(), SortOrder::Desc);
        vm.sort_by(ColumnKey::ModelName);
        assert_eq!(vm.sort_column(), Some(ColumnKey::ModelName));
        assert_eq!(vm.sort_order(), SortOrder::Asc);
    }

    #[test]
    fn sort_on_action_is_noop() {
        let mut vm = seeded();
        vm.sort_by(ColumnKey::ModelType);
        vm.sort_by(ColumnKey::Action);
        assert_eq!(vm.sort_column(), Some(ColumnKey::ModelType));
        assert_eq!(vm.sort_order(), SortOrder::Asc);
    }

    #[test]
    fn sort_keeps_current_page() {
        let mut vm = seeded();
        vm.go_to_page(2);
        vm.sort_by(ColumnKey::ModelName);
        assert_eq!(vm.current_page(), 2);
    }

    #[test]
    fn ascending_sort_is_ordered_by_column_value() {
        let mut vm = TableViewModel::new(vec![
            record("delta", "#4", ModelStatus::Active),
            record("Alpha", "#1", ModelStatus::Active),
            record("charlie", "#3", ModelStatus::Active),
            record("Bravo", "#2", ModelStatus::Active),
        ]);
        vm.sort_by(ColumnKey::ModelName);
        assert_eq!(ids(&vm.visible_rows()), vec!["#1", "#2", "#3", "#4"]);
    }

    #[test]
    fn model_name_sorts_by_display_name_not_id() {
        let mut vm = TableViewModel::new(vec![
            record("Zeta", "#1", ModelStatus::Active),
            record("Alpha", "#2", ModelStatus::Active),
        ]);
        vm.sort_by(ColumnKey::ModelName);
        assert_eq!(ids(&vm.visible_rows()), vec!["#2", "#1"]);
    }

    #[test]
    fn descending_is_exact_reversal_including_ties() {
        let mut vm = seeded();
        vm.sort_by(ColumnKey::Status);
        let asc = all_pages(&mut vm);
        vm.sort_by(ColumnKey::Status);
        let desc = all_pages(&mut vm);

        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);

        // Stable ascending keeps insertion order within the Active group,
        // descending puts that group last and inverts it.
        assert_eq!(&asc[..3], &["#5000002", "#5000004", "#5000006"]);
        assert_eq!(&desc[17..], &["#5000006", "#5000004", "#5000002"]);
    }

    #[test]
    fn three_clicks_restore_ascending_order() {
        let mut vm = seeded();
        vm.sort_by(ColumnKey::Description);
        let first = all_pages(&mut vm);
        vm.sort_by(ColumnKey::Description);
        vm.sort_by(ColumnKey::Description);
        assert_eq!(vm.sort_order(), SortOrder::Asc);
        assert_eq!(all_pages(&mut vm), first);
    }

    #[test]
    fn sort_applies_after_filter() {
        let mut vm = seeded();
        vm.set_search_term("model a");
        vm.sort_by(ColumnKey::ModelName);
        vm.sort_by(ColumnKey::ModelName);
        assert_eq!(ids(&vm.visible_rows()), vec!["#5000001"]);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = TableViewModel::with_page_size(generate_models(3), 0).unwrap_err();
        assert_eq!(err, TableError::ZeroPageSize);

        let vm = TableViewModel::with_page_size(generate_models(3), 2).unwrap();
        assert_eq!(vm.total_pages(), 2);
        assert_eq!(vm.page_numbers().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn empty_record_set_still_has_one_page() {
        let mut vm = TableViewModel::new(Vec::new());
        assert_eq!(vm.total_pages(), 1);
        vm.go_to_page(1);
        assert_eq!(vm.current_page(), 1);
        vm.sort_by(ColumnKey::CreatedOn);
        assert!(vm.visible_rows().is_empty());
    }

    #[test]
    fn page_reports_metadata() {
        let mut vm = seeded();
        vm.go_to_page(2);
        let page = vm.page();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_items, 20);
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.rows[0].id, "#5000006");
    }
}
