use crate::errors::{AppError, AppResult};
use crate::storage::BlobStore;
use chrono::NaiveDateTime;

/// A blob holding one ISO-8601 local date-time, overwritten on every set.
pub struct TimestampMarker<'a> {
    backend: &'a dyn BlobStore,
    blob: String,
}

impl<'a> TimestampMarker<'a> {
    pub fn new(backend: &'a dyn BlobStore, blob: impl Into<String>) -> Self {
        Self {
            backend,
            blob: blob.into(),
        }
    }

    pub fn set(&self, at: NaiveDateTime) -> AppResult<()> {
        self.backend
            .write(&self.blob, &at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string())
    }

    pub fn get(&self) -> AppResult<Option<NaiveDateTime>> {
        let Some(raw) = self.backend.read(&self.blob)? else {
            return Ok(None);
        };
        let raw = raw.trim();
        raw.parse::<NaiveDateTime>()
            .map(Some)
            .map_err(|_| AppError::InvalidTimestamp(format!("{} in {}", raw, self.blob)))
    }
}
