use crate::errors::{AppError, AppResult};
use crate::models::Record;
use crate::storage::BlobStore;
use crate::storage::codec::{parse_log, render_log};
use tracing::{debug, info};

/// The record log: one blob, always read and rewritten whole.
///
/// There is no locking. Two writers racing on the same blob lose one of the
/// updates (the last full overwrite wins).
pub struct LogStore<'a> {
    backend: &'a dyn BlobStore,
    blob: String,
}

impl<'a> LogStore<'a> {
    pub fn new(backend: &'a dyn BlobStore, blob: impl Into<String>) -> Self {
        Self {
            backend,
            blob: blob.into(),
        }
    }

    /// All records in stored order; empty when the blob does not exist yet.
    pub fn load(&self) -> AppResult<Vec<Record>> {
        match self.backend.read(&self.blob)? {
            Some(text) => parse_log(&text),
            None => Ok(Vec::new()),
        }
    }

    /// Append one record, re-sort the whole log by timestamp string and
    /// overwrite the blob.
    pub fn save(&self, record: Record) -> AppResult<()> {
        let mut records = self.load()?;
        debug!(
            timestamp = %record.timestamp,
            category = record.category.as_str(),
            "appending record"
        );
        records.push(record);
        // Stable, so rows with equal timestamps keep their insertion order.
        records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        self.write_all(&records)
    }

    /// Remove the first record equal to `target` field by field.
    ///
    /// The remaining rows are written back in their stored order.
    pub fn delete(&self, target: &Record) -> AppResult<()> {
        let not_found = || {
            AppError::RecordNotFound(format!(
                "{} {} '{}'",
                target.timestamp,
                target.category.as_str(),
                target.value
            ))
        };

        let text = self.backend.read(&self.blob)?.ok_or_else(not_found)?;
        let mut records = parse_log(&text)?;

        let idx = records
            .iter()
            .position(|r| r == target)
            .ok_or_else(not_found)?;
        records.remove(idx);

        info!(timestamp = %target.timestamp, "record deleted");
        self.write_all(&records)
    }

    fn write_all(&self, records: &[Record]) -> AppResult<()> {
        let text = render_log(records)?;
        self.backend.write(&self.blob, &text)?;
        debug!(blob = %self.blob, rows = records.len(), "log rewritten");
        Ok(())
    }
}
