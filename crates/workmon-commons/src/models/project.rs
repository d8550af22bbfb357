//! Project record models.
//!
//! Two shapes exist for one listing: `NewProject` is the loosely-typed
//! submission payload sent by the collector extension, and `ProjectRecord`
//! is the normalized row persisted in the backing table. Normalization
//! (description truncation, tag joining, timestamp/source defaults) happens
//! once, when a submission is turned into a record at write time.

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Column header of the backing table, in fixed order.
pub const PROJECT_COLUMNS: [&str; 11] = [
    "ID",
    "Title",
    "Description",
    "Link",
    "Budget",
    "Tags",
    "Posted_Time",
    "Scraped_At",
    "Source",
    "Pin_Index",
    "Item_Index",
];

/// Maximum number of characters persisted for a description.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Source tag recorded for submissions that do not carry one.
pub const DEFAULT_SOURCE: &str = "workana";

/// Current local time in the ISO-8601 shape stored in `Scraped_At`.
pub fn local_timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// One stored listing row.
///
/// Serialized field names mirror the table columns exactly, so list and
/// detail responses return rows unchanged in shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Link")]
    pub link: String,
    #[serde(rename = "Budget")]
    pub budget: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "Posted_Time")]
    pub posted_time: String,
    #[serde(rename = "Scraped_At")]
    pub scraped_at: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Pin_Index")]
    pub pin_index: String,
    #[serde(rename = "Item_Index")]
    pub item_index: String,
}

impl ProjectRecord {
    /// Cell values in column order, for writing a table row.
    pub fn to_row(&self) -> [&str; 11] {
        [
            &self.id,
            &self.title,
            &self.description,
            &self.link,
            &self.budget,
            &self.tags,
            &self.posted_time,
            &self.scraped_at,
            &self.source,
            &self.pin_index,
            &self.item_index,
        ]
    }

    /// Rebuild a record from a table row read back from disk.
    ///
    /// Short rows (trailing empty cells dropped by the reader) are padded
    /// with empty strings.
    pub fn from_row(cells: &[String]) -> Self {
        let cell = |idx: usize| cells.get(idx).cloned().unwrap_or_default();
        Self {
            id: cell(0),
            title: cell(1),
            description: cell(2),
            link: cell(3),
            budget: cell(4),
            tags: cell(5),
            posted_time: cell(6),
            scraped_at: cell(7),
            source: cell(8),
            pin_index: cell(9),
            item_index: cell(10),
        }
    }
}

/// Incoming submission payload from the collector extension.
///
/// Required fields are `Option` so validation can report every missing
/// field by name instead of failing on the first. `pinIndex`/`itemIndex`
/// are positional hints the scraper may send as strings or numbers; they
/// are kept opaque and stringified at write time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub budget: Option<String>,
    pub tags: Option<Vec<String>>,
    pub posted_time: Option<String>,
    pub scraped_at: Option<String>,
    pub source: Option<String>,
    pub pin_index: Option<Value>,
    pub item_index: Option<Value>,
}

impl NewProject {
    /// Names of required fields absent from the payload.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id.is_none() {
            missing.push("id");
        }
        if self.title.is_none() {
            missing.push("title");
        }
        if self.link.is_none() {
            missing.push("link");
        }
        missing
    }

    /// Normalize the submission into the fixed column shape.
    ///
    /// Must only be called on a validated submission; required fields that
    /// are still absent become empty cells rather than panics.
    pub fn into_record(self) -> ProjectRecord {
        ProjectRecord {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: truncate_chars(self.description.unwrap_or_default(), DESCRIPTION_MAX_CHARS),
            link: self.link.unwrap_or_default(),
            budget: self.budget.unwrap_or_default(),
            tags: self.tags.map(|tags| tags.join(", ")).unwrap_or_default(),
            posted_time: self.posted_time.unwrap_or_default(),
            scraped_at: self.scraped_at.unwrap_or_else(local_timestamp),
            source: self.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            pin_index: opaque_to_string(self.pin_index),
            item_index: opaque_to_string(self.item_index),
        }
    }
}

fn truncate_chars(value: String, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value;
    }
    value.chars().take(max_chars).collect()
}

/// Stringify an opaque scalar hint. Strings pass through unquoted; other
/// JSON scalars keep their literal rendering; absent values become empty.
fn opaque_to_string(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}
