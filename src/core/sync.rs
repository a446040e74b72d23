//! Daily fitness backfill: make sure each of the last seven days has a Sleep
//! and a Steps record, fetching whatever is missing.

use super::log_store::LogStore;
use super::marker::TimestampMarker;
use crate::errors::AppResult;
use crate::models::{Category, Record};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::HashSet;
use tracing::{debug, info};

pub const BACKFILL_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyFitness {
    pub steps: u64,
    pub sleep_hours: f64,
}

/// Anything that can report one day of steps and sleep.
pub trait FitnessSource {
    fn daily_summary(&mut self, date: NaiveDate) -> AppResult<DailyFitness>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Synced less than a day ago.
    Fresh,
    Synced { written: usize },
}

/// The day a sync runs "for": nights end late, so the day only flips at 06:00.
pub fn sync_day(now: NaiveDateTime) -> NaiveDate {
    (now - Duration::hours(6)).date()
}

pub fn is_stale(last_sync: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
    last_sync.is_none_or(|last| now - last >= Duration::days(1))
}

/// Days before `today` lacking Sleep and/or Steps, oldest last.
pub fn missing_days(records: &[Record], today: NaiveDate) -> Vec<(NaiveDate, Vec<Category>)> {
    (1..=BACKFILL_DAYS)
        .filter_map(|i| {
            let day = today - Duration::days(i);
            let day_str = day.format("%Y-%m-%d").to_string();

            let present: HashSet<Category> = records
                .iter()
                .filter(|r| r.day() == day_str)
                .map(|r| r.category)
                .collect();

            let missing: Vec<Category> = Category::FITNESS
                .into_iter()
                .filter(|c| !present.contains(c))
                .collect();

            (!missing.is_empty()).then_some((day, missing))
        })
        .collect()
}

/// Fetch and save the missing records. Returns how many were written.
pub fn backfill(
    log: &LogStore,
    source: &mut dyn FitnessSource,
    today: NaiveDate,
) -> AppResult<usize> {
    let records = log.load()?;
    let mut written = 0;

    for (day, missing) in missing_days(&records, today) {
        debug!(%day, ?missing, "fetching fitness data");
        let summary = source.daily_summary(day)?;
        let timestamp = format!("{}T00:00", day.format("%Y-%m-%d"));

        for category in missing {
            let value = match category {
                Category::Sleep => format!("{:.2}", summary.sleep_hours),
                _ => summary.steps.to_string(),
            };
            log.save(Record::new(timestamp.clone(), category, value, ""))?;
            written += 1;
        }
    }

    Ok(written)
}

/// Backfill when the last sync is a day old (or `force`), then stamp the marker.
pub fn sync_if_stale(
    log: &LogStore,
    marker: &TimestampMarker,
    source: &mut dyn FitnessSource,
    now: NaiveDateTime,
    force: bool,
) -> AppResult<SyncOutcome> {
    if !force && !is_stale(marker.get()?, now) {
        return Ok(SyncOutcome::Fresh);
    }

    let written = backfill(log, source, sync_day(now))?;
    marker.set(now)?;
    info!(written, "fitness sync completed");
    Ok(SyncOutcome::Synced { written })
}
