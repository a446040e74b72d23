use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sync::{SyncOutcome, sync_if_stale};
use crate::core::{LogStore, TimestampMarker};
use crate::errors::{AppError, AppResult};
use crate::integrations::fitbit::FitbitClient;
use crate::storage::open_backend;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::now_local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sync { force } = cmd {
        let backend = open_backend(cfg)?;
        let log = LogStore::new(backend.as_ref(), &cfg.data_file);
        let marker = TimestampMarker::new(backend.as_ref(), &cfg.sync_marker_file);
        let now = now_local(cfg)?;

        let mut fitbit = FitbitClient::from_config(cfg)?;
        match sync_if_stale(&log, &marker, &mut fitbit, now, *force) {
            Ok(SyncOutcome::Fresh) => info("Fitness data already synced today."),
            Ok(SyncOutcome::Synced { written: 0 }) => success("Fitness data already complete."),
            Ok(SyncOutcome::Synced { written }) => {
                success(format!("{written} fitness records added."))
            }
            // not fatal: the user just needs to reconnect
            Err(e @ AppError::AuthorizationRequired(_)) => warning(e),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
