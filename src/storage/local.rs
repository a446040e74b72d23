use super::BlobStore;
use crate::errors::AppResult;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Blobs stored as plain files inside one directory.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl BlobStore for LocalStore {
    fn read(&self, name: &str) -> AppResult<Option<String>> {
        let path = self.path_of(name);
        if !path.exists() {
            debug!(path = %path.display(), "blob missing");
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        debug!(path = %path.display(), bytes = text.len(), "blob read");
        Ok(Some(text))
    }

    fn write(&self, name: &str, contents: &str) -> AppResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_of(name);
        fs::write(&path, contents)?;
        debug!(path = %path.display(), bytes = contents.len(), "blob written");
        Ok(())
    }

    fn exists(&self, name: &str) -> AppResult<bool> {
        Ok(self.path_of(name).exists())
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
