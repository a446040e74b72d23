use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LogStore;
use crate::errors::AppResult;
use crate::models::Record;
use crate::storage::open_backend;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        timestamp,
        category,
        value,
        comment,
    } = cmd
    {
        let target = Record::new(timestamp, *category, value, comment);

        let backend = open_backend(cfg)?;
        LogStore::new(backend.as_ref(), &cfg.data_file).delete(&target)?;

        success(format!(
            "Deleted {} '{}' at {}",
            category.as_str(),
            value,
            timestamp
        ));
    }

    Ok(())
}
