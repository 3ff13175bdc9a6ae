//! Table presentation core: the client-side view state for the item table.
//!
//! Owns the canonical row collection plus the pure projections over it —
//! sort order, search filter, per-row urgency — and the editable-row state
//! machine. Sorting and filtering never reorder or shrink the canonical
//! collection; the editor's buffer never aliases into it.

pub mod columns;
pub mod editor;
pub mod filter;
pub mod sort;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::Item;
use crate::schedule::{self, Urgency};
use columns::ColumnKey;
use editor::RowEditor;
use sort::SortState;

/// One displayable row: the item plus its urgency against the supplied day.
#[derive(Debug)]
pub struct Row<'a> {
    pub item: &'a Item,
    pub urgency: Urgency,
}

/// View state for the item table.
#[derive(Debug, Default)]
pub struct TableView {
    items: Vec<Item>,
    search: String,
    pub sort: SortState,
    pub editor: RowEditor,
    widths: HashMap<ColumnKey, u16>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical, unprojected collection.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Replaces the canonical rows after a list round trip. Sort, search,
    /// widths, and any in-progress edit are untouched.
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Applies an authoritative post-write row: replaces the row with the
    /// same id, or appends it (a freshly created item).
    pub fn apply_saved(&mut self, item: Item) {
        match self.items.iter_mut().find(|row| row.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn toggle_sort(&mut self, key: ColumnKey) {
        self.sort.toggle(key);
    }

    /// Enters edit mode on the row with the given id, seeding the edit
    /// buffer from its current persisted values. Returns false when no such
    /// row exists.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        match self.items.iter().find(|row| row.id == id) {
            Some(row) => {
                self.editor.begin(row);
                true
            }
            None => false,
        }
    }

    /// The displayed rows: filtered, sorted, and classified against `today`.
    /// Urgency is recomputed on every call, never cached.
    pub fn rows(&self, today: NaiveDate) -> Vec<Row<'_>> {
        filter::apply(self.sort.project(&self.items), &self.search)
            .into_iter()
            .map(|item| Row {
                urgency: schedule::classify(item.submit_by_date, today),
                item,
            })
            .collect()
    }

    /// A column's current width: the user's override, or the descriptor
    /// default. Widths are presentation state only.
    pub fn column_width(&self, key: ColumnKey) -> u16 {
        self.widths
            .get(&key)
            .copied()
            .unwrap_or_else(|| columns::spec(key).default_width)
    }

    pub fn set_column_width(&mut self, key: ColumnKey, width: u16) {
        self.widths.insert(key, width);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{item, scheduled_item};
    use super::*;

    fn today() -> NaiveDate {
        "2025-01-25".parse().unwrap()
    }

    #[test]
    fn rows_compose_filter_sort_and_classification() {
        let mut view = TableView::new();
        view.replace_all(vec![
            scheduled_item(1, "2025-06-01", 0),
            scheduled_item(2, "2025-01-20", 0),
            item(3, Some("Maker 3 no dates"), None, None),
        ]);
        view.set_search("maker");
        view.toggle_sort(ColumnKey::Id);

        let rows = view.rows(today());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].urgency, Urgency::Normal);
        assert_eq!(rows[1].urgency, Urgency::Overdue);
        assert_eq!(rows[2].urgency, Urgency::None);
    }

    #[test]
    fn urgency_tracks_the_supplied_day() {
        let mut view = TableView::new();
        view.replace_all(vec![scheduled_item(1, "2025-02-05", 0)]);

        let urgent_day: NaiveDate = "2025-01-25".parse().unwrap();
        let overdue_day: NaiveDate = "2025-02-05".parse().unwrap();
        assert_eq!(view.rows(urgent_day)[0].urgency, Urgency::Urgent);
        assert_eq!(view.rows(overdue_day)[0].urgency, Urgency::Overdue);
    }

    #[test]
    fn apply_saved_replaces_in_place_or_appends() {
        let mut view = TableView::new();
        view.replace_all(vec![item(1, Some("Acme"), None, None)]);

        view.apply_saved(item(1, Some("Acme Updated"), None, None));
        assert_eq!(view.items().len(), 1);
        assert_eq!(view.items()[0].manufacturer.as_deref(), Some("Acme Updated"));

        view.apply_saved(item(2, Some("New"), None, None));
        assert_eq!(view.items().len(), 2);
    }

    #[test]
    fn begin_edit_requires_a_known_row() {
        let mut view = TableView::new();
        view.replace_all(vec![item(1, Some("Acme"), None, None)]);
        assert!(view.begin_edit(1));
        assert!(!view.begin_edit(99));
        // The failed begin does not disturb the existing edit.
        assert_eq!(view.editor.editing_id(), Some(1));
    }

    #[test]
    fn column_widths_default_until_overridden() {
        let mut view = TableView::new();
        assert_eq!(view.column_width(ColumnKey::Description), 300);
        view.set_column_width(ColumnKey::Description, 420);
        assert_eq!(view.column_width(ColumnKey::Description), 420);
        // Other columns keep their defaults.
        assert_eq!(view.column_width(ColumnKey::Id), 50);
    }

    #[test]
    fn replacing_rows_preserves_view_state() {
        let mut view = TableView::new();
        view.set_search("acme");
        view.toggle_sort(ColumnKey::Manufacturer);
        view.set_column_width(ColumnKey::Type, 99);

        view.replace_all(vec![item(1, Some("Acme"), None, None)]);
        assert_eq!(view.search(), "acme");
        assert!(view.sort.current().is_some());
        assert_eq!(view.column_width(ColumnKey::Type), 99);
    }
}
