use crate::errors::{AppError, AppResult};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for the local backend; defaults to the config directory.
    pub data_dir: Option<String>,
    pub data_file: String,
    pub failed_attempt_file: String,
    pub sync_marker_file: String,
    /// IANA zone used for "now" when stamping records and picking sync days.
    pub timezone: String,
    pub history_limit: usize,
    pub login_cooldown_hours: i64,
    pub gcs: GcsConfig,
    pub fitbit: OAuthClientConfig,
    pub calendar: OAuthClientConfig,
    pub calendar_events: Vec<CalendarCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GcsConfig {
    pub project_id: Option<String>,
    pub bucket: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthClientConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
}

/// A calendar category: events whose title contains one of `keywords`
/// are counted towards it. Order matters, the first match wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CalendarCategory {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub target: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            data_file: "data.csv".to_string(),
            failed_attempt_file: "last_failed_attempt.txt".to_string(),
            sync_marker_file: "last_fitness_sync.txt".to_string(),
            timezone: "Europe/Paris".to_string(),
            history_limit: 20,
            login_cooldown_hours: 24,
            gcs: GcsConfig::default(),
            fitbit: OAuthClientConfig {
                redirect_uri: "http://localhost:8080/fitbit_callback".to_string(),
                ..Default::default()
            },
            calendar: OAuthClientConfig {
                redirect_uri: "http://localhost:8080/calendar_callback".to_string(),
                ..Default::default()
            },
            calendar_events: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lifepulse")
    }

    /// Return the full path of the config file (`CONFIG_PATH` wins)
    pub fn config_file() -> PathBuf {
        env::var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::config_dir().join("lifepulse.yaml"))
    }

    /// OAuth tokens live next to the config file, never in the data store.
    pub fn token_file() -> PathBuf {
        Self::token_file_beside(&Self::config_file())
    }

    pub fn token_file_beside(config_file: &Path) -> PathBuf {
        config_file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_dir)
            .join("tokens.json")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_dir)
    }

    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::Config(format!("unknown timezone '{}'", self.timezone)))
    }

    /// Load configuration from file, or defaults if not found; environment
    /// variables override file values.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        } else {
            Config::default()
        };
        debug!(path = %path.display(), found = path.exists(), "configuration loaded");

        cfg.apply_env();
        Ok(cfg)
    }

    fn apply_env(&mut self) {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());

        if let Some(v) = var("PROJECT_ID") {
            self.gcs.project_id = Some(v);
        }
        if let Some(v) = var("BUCKET_NAME") {
            self.gcs.bucket = Some(v);
        }
        if let Some(v) = var("FILE_NAME") {
            self.data_file = v;
        }
        if let Some(v) = var("FITBIT_CLIENT_ID") {
            self.fitbit.client_id = Some(v);
        }
        if let Some(v) = var("FITBIT_CLIENT_SECRET") {
            self.fitbit.client_secret = Some(v);
        }
        if let Some(v) = var("CALENDAR_CLIENT_ID") {
            self.calendar.client_id = Some(v);
        }
        if let Some(v) = var("CALENDAR_CLIENT_SECRET") {
            self.calendar.client_secret = Some(v);
        }
    }

    /// Write a default configuration file (unless one exists) and create the
    /// data directory. Returns the config file path.
    pub fn init_all(data_dir: Option<String>) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        let path = Self::config_file();
        if !path.exists() {
            let cfg = Config {
                data_dir,
                ..Config::default()
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, serde_yaml::to_string(&cfg)?)?;
        }

        let cfg = Self::load()?;
        fs::create_dir_all(cfg.data_dir())?;
        Ok(path)
    }
}
