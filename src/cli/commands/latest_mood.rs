use crate::config::Config;
use crate::core::LogStore;
use crate::core::queries::latest_mood;
use crate::errors::AppResult;
use crate::storage::open_backend;
use crate::ui::messages::{info, success};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let backend = open_backend(cfg)?;
    let records = LogStore::new(backend.as_ref(), &cfg.data_file).load()?;

    match latest_mood(&records)? {
        Some(mood) => {
            let comment = if mood.comment.is_empty() {
                String::new()
            } else {
                format!(" ({})", mood.comment)
            };
            success(format!(
                "Latest mood: {}{} on {}",
                mood.value,
                comment,
                mood.timestamp.format("%Y-%m-%d %H:%M")
            ));
        }
        None => info("No mood recorded yet."),
    }
    Ok(())
}
