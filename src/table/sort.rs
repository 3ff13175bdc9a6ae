//! Single-key sort state and its projection over the canonical collection.

use super::columns::ColumnKey;
use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// At most one column sorts the table at a time; no secondary key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    order: Option<(ColumnKey, Direction)>,
}

impl SortState {
    /// Selecting the sorted column again flips direction; selecting a
    /// different column resets to ascending.
    pub fn toggle(&mut self, key: ColumnKey) {
        self.order = match self.order {
            Some((current, direction)) if current == key => Some((key, direction.flipped())),
            _ => Some((key, Direction::Ascending)),
        };
    }

    pub fn clear(&mut self) {
        self.order = None;
    }

    pub fn current(&self) -> Option<(ColumnKey, Direction)> {
        self.order
    }

    /// Stable, non-destructive ordering projection: the source slice is never
    /// reordered, ties keep their relative order.
    pub fn project<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let mut rows: Vec<&Item> = items.iter().collect();
        if let Some((key, direction)) = self.order {
            rows.sort_by(|a, b| {
                let ordering = key.compare(a, b);
                match direction {
                    Direction::Ascending => ordering,
                    Direction::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }
}
