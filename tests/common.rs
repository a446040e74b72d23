#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use lifepulse::models::{Category, Record};
use lifepulse::storage::LocalStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub const LOG: &str = "data.csv";

/// A fresh local backend in its own temp directory. Keep the TempDir alive
/// for as long as the store is used.
pub fn temp_store() -> (TempDir, LocalStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = LocalStore::new(dir.path());
    (dir, store)
}

pub fn rec(ts: &str, category: Category, value: &str) -> Record {
    Record::new(ts, category, value, "")
}

/// Isolated HOME and data dir for running the binary.
pub struct Sandbox {
    pub home: TempDir,
    pub data: PathBuf,
}

pub fn sandbox() -> Sandbox {
    let home = tempfile::tempdir().expect("create temp home");
    let data = home.path().join("data");
    Sandbox { home, data }
}

impl Sandbox {
    pub fn lp(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("lifepulse");
        cmd.env("HOME", self.home.path())
            .env_remove("CONFIG_PATH")
            .env_remove("PROJECT_ID")
            .env_remove("BUCKET_NAME")
            .env_remove("GCS_ACCESS_TOKEN")
            .env_remove("FILE_NAME")
            .env_remove("RUST_LOG")
            .env_remove("FITBIT_CLIENT_ID")
            .env_remove("FITBIT_CLIENT_SECRET")
            .env_remove("CALENDAR_CLIENT_ID")
            .env_remove("CALENDAR_CLIENT_SECRET")
            .arg("--data-dir")
            .arg(&self.data);
        cmd
    }

    pub fn log_text(&self) -> String {
        std::fs::read_to_string(self.data.join(LOG)).unwrap_or_default()
    }
}
