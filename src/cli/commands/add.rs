use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LogStore;
use crate::errors::AppResult;
use crate::models::Record;
use crate::models::record::TIMESTAMP_FORMAT;
use crate::storage::open_backend;
use crate::ui::messages::success;
use crate::utils::time::{normalize_timestamp, now_local};

/// Record an observation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        category,
        value,
        at,
        comment,
    } = cmd
    {
        let timestamp = match at {
            Some(ts) => normalize_timestamp(ts)?,
            None => now_local(cfg)?.format(TIMESTAMP_FORMAT).to_string(),
        };

        let backend = open_backend(cfg)?;
        let log = LogStore::new(backend.as_ref(), &cfg.data_file);
        log.save(Record::new(timestamp.clone(), *category, value, comment))?;

        success(format!(
            "{} '{}' recorded at {}",
            category.as_str(),
            value,
            timestamp
        ));
    }

    Ok(())
}
