//! Editable-row state machine.
//!
//! At most one row is editable at a time: the editor owns a single explicit
//! state value rather than per-row flags. The edit buffer is a value copy of
//! the row's persisted fields; the canonical collection is only touched when
//! a save resolves successfully.
//!
//! Saves are guarded against re-entry and stale completion: `begin_save`
//! issues at most one outstanding ticket, and every transition that leaves
//! the current edit (cancel, a new edit, a finished save) bumps an epoch so
//! a response for the old edit resolves as [`SaveResolution::Stale`].

use chrono::NaiveDate;

use crate::models::{Item, ItemDraft};
use crate::repository::RepositoryError;

/// Input rejected at the boundary, before any request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("lead time must be a non-negative whole number")]
    InvalidLeadTime,
    #[error("dates must be YYYY-MM-DD")]
    InvalidDate,
}

/// Value copy of a row's editable fields while it is in edit mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub manufacturer: String,
    pub item_type: String,
    pub description: String,
    lead_time_weeks: Option<i32>,
    due_date: Option<NaiveDate>,
}

impl EditBuffer {
    fn seeded_from(item: &Item) -> Self {
        Self {
            manufacturer: item.manufacturer.clone().unwrap_or_default(),
            item_type: item.item_type.clone().unwrap_or_default(),
            description: item.description.clone().unwrap_or_default(),
            lead_time_weeks: item.lead_time_weeks,
            due_date: item.due_date,
        }
    }

    pub fn lead_time_weeks(&self) -> Option<i32> {
        self.lead_time_weeks
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Parses a lead-time input; blank clears it, negatives are rejected.
    pub fn set_lead_time_weeks(&mut self, raw: &str) -> Result<(), InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.lead_time_weeks = None;
            return Ok(());
        }
        match trimmed.parse::<i32>() {
            Ok(weeks) if weeks >= 0 => {
                self.lead_time_weeks = Some(weeks);
                Ok(())
            }
            _ => Err(InputError::InvalidLeadTime),
        }
    }

    /// Parses a date input; blank clears it.
    pub fn set_due_date(&mut self, raw: &str) -> Result<(), InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.due_date = None;
            return Ok(());
        }
        match trimmed.parse::<NaiveDate>() {
            Ok(date) => {
                self.due_date = Some(date);
                Ok(())
            }
            Err(_) => Err(InputError::InvalidDate),
        }
    }

    /// The full editable field set for a save. Blank text clears the field;
    /// typed fields are already valid by construction.
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            manufacturer: non_blank(&self.manufacturer),
            item_type: non_blank(&self.item_type),
            description: non_blank(&self.description),
            lead_time_weeks: self.lead_time_weeks,
            due_date: self.due_date,
        }
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Default)]
enum EditState {
    #[default]
    Idle,
    Editing {
        id: i64,
        buffer: EditBuffer,
        saving: bool,
    },
}

/// Single-use handle tying a dispatched save to the edit it belongs to.
#[derive(Debug)]
pub struct SaveTicket {
    id: i64,
    epoch: u64,
}

impl SaveTicket {
    pub fn item_id(&self) -> i64 {
        self.id
    }
}

/// How a completed save call resolved.
#[derive(Debug)]
pub enum SaveResolution {
    /// Edit finished; apply this authoritative row to the canonical rows.
    Saved(Item),
    /// Save failed; the row is still editing with its buffer intact.
    Failed(RepositoryError),
    /// The response belongs to an edit that was cancelled or superseded;
    /// discard it.
    Stale,
}

/// The read/edit lifecycle for the whole table.
#[derive(Debug, Default)]
pub struct RowEditor {
    state: EditState,
    epoch: u64,
}

impl RowEditor {
    /// Enters edit mode on a row, seeding the buffer with a copy of its
    /// persisted values. Any edit already in progress is abandoned, and any
    /// save still in flight for it becomes stale.
    pub fn begin(&mut self, row: &Item) {
        self.epoch += 1;
        self.state = EditState::Editing {
            id: row.id,
            buffer: EditBuffer::seeded_from(row),
            saving: false,
        };
    }

    /// Discards the in-progress edit; no network call is made, and an
    /// in-flight save response becomes stale.
    pub fn cancel(&mut self) {
        self.epoch += 1;
        self.state = EditState::Idle;
    }

    pub fn editing_id(&self) -> Option<i64> {
        match &self.state {
            EditState::Editing { id, .. } => Some(*id),
            EditState::Idle => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(&self.state, EditState::Editing { saving: true, .. })
    }

    pub fn buffer(&self) -> Option<&EditBuffer> {
        match &self.state {
            EditState::Editing { buffer, .. } => Some(buffer),
            EditState::Idle => None,
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut EditBuffer> {
        match &mut self.state {
            EditState::Editing { buffer, .. } => Some(buffer),
            EditState::Idle => None,
        }
    }

    /// Dispatches a save: returns the ticket and the field set to submit, or
    /// `None` when nothing is being edited or a save is already in flight
    /// (the re-entrancy guard).
    pub fn begin_save(&mut self) -> Option<(SaveTicket, ItemDraft)> {
        match &mut self.state {
            EditState::Editing { id, buffer, saving } if !*saving => {
                *saving = true;
                let ticket = SaveTicket {
                    id: *id,
                    epoch: self.epoch,
                };
                Some((ticket, buffer.to_draft()))
            }
            _ => None,
        }
    }

    /// Resolves a dispatched save with the repository's answer.
    pub fn complete_save(
        &mut self,
        ticket: SaveTicket,
        result: Result<Item, RepositoryError>,
    ) -> SaveResolution {
        if ticket.epoch != self.epoch {
            return SaveResolution::Stale;
        }
        match std::mem::take(&mut self.state) {
            EditState::Editing { id, buffer, saving } if saving && id == ticket.id => {
                match result {
                    Ok(item) => {
                        self.epoch += 1;
                        SaveResolution::Saved(item)
                    }
                    Err(err) => {
                        self.state = EditState::Editing {
                            id,
                            buffer,
                            saving: false,
                        };
                        SaveResolution::Failed(err)
                    }
                }
            }
            other => {
                self.state = other;
                SaveResolution::Stale
            }
        }
    }
}
