//! Blob storage backends.
//!
//! Everything this tool persists is a named text blob read and written whole:
//! the record log, the failed-login marker and the sync marker. A backend only
//! needs to read, write and test for existence.

pub mod codec;
mod gcs;
mod local;

pub use gcs::GcsStore;
pub use local::LocalStore;

use crate::config::Config;
use crate::errors::AppResult;
use tracing::info;

pub trait BlobStore {
    /// Whole blob as text, `None` when it does not exist.
    fn read(&self, name: &str) -> AppResult<Option<String>>;

    /// Replace the blob with `contents`, creating it if needed.
    fn write(&self, name: &str, contents: &str) -> AppResult<()>;

    fn exists(&self, name: &str) -> AppResult<bool> {
        Ok(self.read(name)?.is_some())
    }

    /// Short human-readable location, used in messages.
    fn describe(&self) -> String;
}

/// Pick the backend from configuration: a bucket when both project and
/// bucket are set, the local data directory otherwise.
pub fn open_backend(cfg: &Config) -> AppResult<Box<dyn BlobStore>> {
    match (&cfg.gcs.project_id, &cfg.gcs.bucket) {
        (Some(project), Some(bucket)) => {
            let store = GcsStore::new(project, bucket, cfg.gcs.access_token.clone())?;
            info!(bucket = %bucket, "using cloud storage backend");
            Ok(Box::new(store))
        }
        _ => {
            let dir = cfg.data_dir();
            info!(dir = %dir.display(), "using local storage backend");
            Ok(Box::new(LocalStore::new(dir)))
        }
    }
}
