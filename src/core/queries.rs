use crate::errors::{AppError, AppResult};
use crate::models::{Category, Record};
use chrono::NaiveDateTime;

/// The most recent mood entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestMood {
    pub timestamp: NaiveDateTime,
    pub value: String,
    pub comment: String,
}

/// Most recent Mood record by parsed date-time, not by string order.
///
/// Every Mood timestamp must parse; one bad row fails the whole lookup.
pub fn latest_mood(records: &[Record]) -> AppResult<Option<LatestMood>> {
    let mut best: Option<(NaiveDateTime, &Record)> = None;

    for r in records.iter().filter(|r| r.category == Category::Mood) {
        let ts = r
            .parsed_timestamp()
            .ok_or_else(|| AppError::InvalidTimestamp(r.timestamp.clone()))?;

        // strictly greater: on ties the earlier row in the log wins
        if best.is_none_or(|(b, _)| ts > b) {
            best = Some((ts, r));
        }
    }

    Ok(best.map(|(timestamp, r)| LatestMood {
        timestamp,
        value: r.value.clone(),
        comment: r.comment.clone(),
    }))
}

/// Most recent first, capped at `limit` unless `show_all`.
pub fn recent_history(records: &[Record], limit: usize, show_all: bool) -> Vec<Record> {
    let take = if show_all { records.len() } else { limit };
    records.iter().rev().take(take).cloned().collect()
}
