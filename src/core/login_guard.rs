use super::marker::TimestampMarker;
use crate::errors::{AppError, AppResult};
use crate::storage::BlobStore;
use chrono::{Duration, NaiveDateTime, TimeDelta};
use tracing::warn;

/// Rate limiting for the password gate: one global "last failed attempt"
/// marker, and a cooldown window after it.
pub struct LoginGuard<'a> {
    marker: TimestampMarker<'a>,
    cooldown_hours: i64,
}

impl<'a> LoginGuard<'a> {
    pub fn new(backend: &'a dyn BlobStore, blob: impl Into<String>, cooldown_hours: i64) -> Self {
        Self {
            marker: TimestampMarker::new(backend, blob),
            cooldown_hours,
        }
    }

    pub fn record_failure(&self, now: NaiveDateTime) -> AppResult<()> {
        warn!(at = %now, "failed login attempt recorded");
        self.marker.set(now)
    }

    pub fn last_failure(&self) -> AppResult<Option<NaiveDateTime>> {
        self.marker.get()
    }

    /// Time left before logins are accepted again, `None` when not locked.
    pub fn cooldown_remaining(&self, now: NaiveDateTime) -> AppResult<Option<Duration>> {
        let Some(last) = self.last_failure()? else {
            return Ok(None);
        };
        let out_of_range = || {
            AppError::Config(format!(
                "login_cooldown_hours {} is out of range",
                self.cooldown_hours
            ))
        };
        let window = TimeDelta::try_hours(self.cooldown_hours).ok_or_else(out_of_range)?;
        let unlock = last.checked_add_signed(window).ok_or_else(out_of_range)?;

        Ok(Some(unlock - now).filter(|left| *left > Duration::zero()))
    }
}
