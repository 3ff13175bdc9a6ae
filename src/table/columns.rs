//! Declarative column model for the item table.
//!
//! Columns are a static ordered list of descriptors tagged by field; each tag
//! carries the comparator and cell-formatter capability, so adding a field is
//! a one-line data change rather than new per-field branching at call sites.

use std::cmp::Ordering;

use crate::models::Item;

/// Field tag identifying one column of the item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Id,
    Manufacturer,
    Type,
    Description,
    LeadTimeWeeks,
    SubmitByDate,
    DueDate,
}

/// One column descriptor: label, default width, and whether the cell takes
/// input while its row is in edit mode.
pub struct ColumnSpec {
    pub key: ColumnKey,
    pub label: &'static str,
    pub default_width: u16,
    pub editable: bool,
}

/// The table's columns, in display order.
pub const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        key: ColumnKey::Id,
        label: "ID",
        default_width: 50,
        editable: false,
    },
    ColumnSpec {
        key: ColumnKey::Manufacturer,
        label: "Manufacturer",
        default_width: 200,
        editable: true,
    },
    ColumnSpec {
        key: ColumnKey::Type,
        label: "Type",
        default_width: 150,
        editable: true,
    },
    ColumnSpec {
        key: ColumnKey::Description,
        label: "Description",
        default_width: 300,
        editable: true,
    },
    ColumnSpec {
        key: ColumnKey::LeadTimeWeeks,
        label: "Lead Time in Weeks",
        default_width: 150,
        editable: true,
    },
    ColumnSpec {
        key: ColumnKey::SubmitByDate,
        label: "Submit by date",
        default_width: 150,
        editable: false,
    },
    ColumnSpec {
        key: ColumnKey::DueDate,
        label: "Due on site",
        default_width: 150,
        editable: true,
    },
];

/// Looks up a column's descriptor.
pub fn spec(key: ColumnKey) -> &'static ColumnSpec {
    COLUMNS
        .iter()
        .find(|column| column.key == key)
        .expect("every ColumnKey has a descriptor")
}

impl ColumnKey {
    /// Compares two items under this column. Text compares case-sensitive
    /// lexicographic; numeric and date columns compare by underlying value.
    /// Rows missing the value order after rows that have it.
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            ColumnKey::Id => a.id.cmp(&b.id),
            ColumnKey::Manufacturer => cmp_absent_last(a.manufacturer.as_ref(), b.manufacturer.as_ref()),
            ColumnKey::Type => cmp_absent_last(a.item_type.as_ref(), b.item_type.as_ref()),
            ColumnKey::Description => cmp_absent_last(a.description.as_ref(), b.description.as_ref()),
            ColumnKey::LeadTimeWeeks => {
                cmp_absent_last(a.lead_time_weeks.as_ref(), b.lead_time_weeks.as_ref())
            }
            ColumnKey::SubmitByDate => {
                cmp_absent_last(a.submit_by_date.as_ref(), b.submit_by_date.as_ref())
            }
            ColumnKey::DueDate => cmp_absent_last(a.due_date.as_ref(), b.due_date.as_ref()),
        }
    }

    /// Formats this column's cell for display.
    pub fn format(self, item: &Item) -> String {
        match self {
            ColumnKey::Id => item.id.to_string(),
            ColumnKey::Manufacturer => item.manufacturer.clone().unwrap_or_default(),
            ColumnKey::Type => item.item_type.clone().unwrap_or_default(),
            ColumnKey::Description => item.description.clone().unwrap_or_default(),
            ColumnKey::LeadTimeWeeks => item.lead_time_weeks.unwrap_or(0).to_string(),
            ColumnKey::SubmitByDate => format_date(item.submit_by_date),
            ColumnKey::DueDate => format_date(item.due_date),
        }
    }
}

fn cmp_absent_last<T: Ord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn format_date(date: Option<chrono::NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => "No date set".to_string(),
    }
}
