//! Time utilities: "now" in the configured zone, timestamp normalisation,
//! duration formatting.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::record::{TIMESTAMP_FORMAT, parse_timestamp};
use chrono::{Duration, NaiveDateTime, Utc};

/// Current wall-clock time in the configured timezone.
pub fn now_local(cfg: &Config) -> AppResult<NaiveDateTime> {
    Ok(Utc::now().with_timezone(&cfg.tz()?).naive_local())
}

/// Accept any known timestamp format and return it in the current one.
pub fn normalize_timestamp(input: &str) -> AppResult<String> {
    parse_timestamp(input)
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .ok_or_else(|| AppError::InvalidTimestamp(input.to_string()))
}

pub fn format_duration(d: Duration) -> String {
    let mins = d.num_minutes().max(0);
    format!("{}h{:02}m", mins / 60, mins % 60)
}
