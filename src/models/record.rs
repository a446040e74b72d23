use super::category::Category;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Format used for every record written by this tool.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Formats found in older log files, tried in order after `TIMESTAMP_FORMAT`.
const LEGACY_FORMATS: [&str; 2] = ["%Y-%m-%d - %Hh", "%Y-%m-%dT%H:%M:%S"];

/// One logged observation.
///
/// Records have no id: two records are the same record when every field
/// matches, which is how `LogStore::delete` finds its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub timestamp: String,
    pub category: Category,
    pub value: String,
    pub comment: String,
}

impl Record {
    pub fn new(
        timestamp: impl Into<String>,
        category: Category,
        value: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            category,
            value: value.into(),
            comment: comment.into(),
        }
    }

    /// Date part of the timestamp (`YYYY-MM-DD`), whatever the format.
    pub fn day(&self) -> &str {
        self.timestamp.get(..10).unwrap_or(&self.timestamp)
    }

    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    pub fn as_row(&self) -> [&str; 4] {
        [
            &self.timestamp,
            self.category.as_str(),
            &self.value,
            &self.comment,
        ]
    }
}

/// Parse a record timestamp in the current or any legacy format.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    std::iter::once(TIMESTAMP_FORMAT)
        .chain(LEGACY_FORMATS)
        .find_map(|fmt| parse_with(s.trim(), fmt))
}

fn parse_with(s: &str, fmt: &str) -> Option<NaiveDateTime> {
    // "%Hh" carries no minutes, which NaiveDateTime refuses on its own.
    if fmt.ends_with("%Hh") {
        return NaiveDateTime::parse_from_str(&format!("{s}:00"), &format!("{fmt}:%M")).ok();
    }
    NaiveDateTime::parse_from_str(s, fmt).ok()
}
