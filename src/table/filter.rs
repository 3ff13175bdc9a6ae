//! Search filter: a pure, membership-only projection.

use crate::models::Item;

/// True when any free-text field contains the query, case-insensitively.
/// A blank query matches everything.
pub fn matches(item: &Item, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        item.manufacturer.as_deref(),
        item.item_type.as_deref(),
        item.description.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Restricts rows to those matching the query, preserving order.
pub fn apply<'a>(rows: Vec<&'a Item>, query: &str) -> Vec<&'a Item> {
    if query.trim().is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|item| matches(item, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::columns::ColumnKey;
    use crate::table::sort::SortState;
    use crate::table::test_support::item;

    #[test]
    fn matching_is_case_insensitive_substring() {
        let row = item(1, Some("Acme Industrial"), Some("Valve"), Some("1in ball"));
        assert!(matches(&row, "ACME"));
        assert!(matches(&row, "ball"));
        assert!(matches(&row, "alv"));
        assert!(!matches(&row, "pump"));
    }

    #[test]
    fn searches_every_free_text_field() {
        let by_type = item(1, None, Some("Gasket"), None);
        let by_description = item(2, None, None, Some("spiral wound"));
        assert!(matches(&by_type, "gask"));
        assert!(matches(&by_description, "WOUND"));
    }

    #[test]
    fn blank_query_matches_rows_with_no_text_at_all() {
        let empty = item(1, None, None, None);
        assert!(matches(&empty, ""));
        assert!(matches(&empty, "   "));
        assert!(!matches(&empty, "x"));
    }

    #[test]
    fn filter_commutes_with_sort() {
        let items = vec![
            item(1, Some("Zenith"), None, None),
            item(2, Some("Acme"), None, None),
            item(3, Some("Apex"), None, None),
            item(4, Some("Acme West"), None, None),
        ];
        let mut sort = SortState::default();
        sort.toggle(ColumnKey::Manufacturer);

        let filter_then_sort: Vec<i64> = {
            let kept: Vec<Item> = items
                .iter()
                .filter(|row| matches(row, "acme"))
                .cloned()
                .collect();
            sort.project(&kept).iter().map(|row| row.id).collect()
        };
        let sort_then_filter: Vec<i64> = apply(sort.project(&items), "acme")
            .iter()
            .map(|row| row.id)
            .collect();

        assert_eq!(filter_then_sort, sort_then_filter);
        assert_eq!(sort_then_filter, vec![2, 4]);
    }
}
