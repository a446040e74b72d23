use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;

/// One event as returned by the Calendar API (only the fields we read).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CalendarEvent {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub start: EventTime,
    #[serde(default)]
    pub end: EventTime,
}

/// Timed events carry `dateTime`, all-day events only `date`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(default)]
    pub date_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl CalendarEvent {
    pub fn title(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    /// Length in hours; `None` for all-day events or a missing end.
    pub fn duration_hours(&self) -> Option<f64> {
        let start = self.start.date_time?;
        let end = self.end.date_time?;
        Some((end - start).num_seconds() as f64 / 3600.0)
    }
}
