//! Submit-by date derivation and urgency classification.
//!
//! The submit-by date is the single derived value in the system: the latest
//! date an order can be submitted and still arrive by its due date, given the
//! item's lead time. It is computed here and nowhere else — the persistence
//! layer stores only `due_date` and `lead_time_weeks`, and consumers classify
//! whatever date the server returned rather than re-deriving it.
//!
//! All arithmetic is date-only against the UTC calendar date, so boundary
//! classification does not drift with the viewer's local timezone.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Rows whose submit-by date falls within this many days of today are urgent.
pub const URGENT_WINDOW_DAYS: i64 = 14;

/// Computes the submit-by date: `due_date - lead_time_weeks` weeks.
///
/// An absent lead time behaves as zero, so a due date with no lead time
/// yields the due date itself. A lead time with no due date yields nothing.
pub fn submit_by(due_date: Option<NaiveDate>, lead_time_weeks: Option<i32>) -> Option<NaiveDate> {
    due_date.map(|due| due - Duration::weeks(i64::from(lead_time_weeks.unwrap_or(0))))
}

/// How pressing a row is, relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// No submit-by date to judge against.
    None,
    /// The submit-by date is today or has already passed.
    Overdue,
    /// The submit-by date falls within the next [`URGENT_WINDOW_DAYS`] days.
    Urgent,
    Normal,
}

/// Classifies a submit-by date against the given day.
///
/// Pure function of its inputs; callers must pass a fresh `today` on every
/// evaluation rather than caching a classification.
pub fn classify(submit_by: Option<NaiveDate>, today: NaiveDate) -> Urgency {
    match submit_by {
        None => Urgency::None,
        Some(date) if date <= today => Urgency::Overdue,
        Some(date) if date <= today + Duration::days(URGENT_WINDOW_DAYS) => Urgency::Urgent,
        Some(_) => Urgency::Normal,
    }
}

/// Today as a UTC calendar date.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
