//! Wire-facing item and category types shared by the HTTP layer, the
//! repository seam, and the table presentation core.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::{entities::item, schedule};

/// One inventory line as it travels over the API, including the derived
/// submit-by date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub manufacturer: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub description: Option<String>,
    pub lead_time_weeks: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub submit_by_date: Option<NaiveDate>,
}

impl Item {
    /// Builds the wire shape from a stored row, deriving `submit_by_date`.
    ///
    /// This is the only place the derived date enters an [`Item`]; it is never
    /// read from storage or recomputed downstream.
    pub fn from_model(model: item::Model) -> Self {
        let submit_by_date = schedule::submit_by(model.due_date, model.lead_time_weeks);
        Self {
            id: model.id,
            manufacturer: model.manufacturer,
            item_type: model.item_type,
            description: model.description,
            lead_time_weeks: model.lead_time_weeks,
            due_date: model.due_date,
            submit_by_date,
        }
    }
}

/// The editable field set sent on create and update. Every field is optional
/// at the transport layer; an update resends the full set (full-row replace).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lead_time_weeks_lenient")]
    pub lead_time_weeks: Option<i32>,
    #[serde(default, deserialize_with = "date_lenient")]
    pub due_date: Option<NaiveDate>,
}

/// A flat category value used to constrain the `type` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,
}

/// Accepts a JSON number or a numeric string; HTML forms submit empty inputs
/// as `""`, which maps to absent.
fn lead_time_weeks_lenient<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i32),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(weeks)) => Ok(Some(weeks)),
        Some(NumberOrString::Text(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<i32>().map(Some).map_err(|_| {
                de::Error::custom(format!("invalid lead_time_weeks: {:?}", raw))
            })
        }
    }
}

/// ISO-8601 date string, with `""` treated as absent.
fn date_lenient<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<NaiveDate>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid date: {:?}", raw)))
        }
    }
}
