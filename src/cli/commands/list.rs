use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LogStore;
use crate::core::queries::recent_history;
use crate::errors::AppResult;
use crate::models::Record;
use crate::storage::open_backend;
use crate::ui::messages::{category_label, header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit, all } = cmd {
        let backend = open_backend(cfg)?;
        let records = LogStore::new(backend.as_ref(), &cfg.data_file).load()?;

        if records.is_empty() {
            info(format!("No records yet in {}", backend.describe()));
            return Ok(());
        }

        let shown = recent_history(&records, limit.unwrap_or(cfg.history_limit), *all);
        header(format!("{} of {} records", shown.len(), records.len()));
        print_records(&shown);
    }
    Ok(())
}

fn print_records(records: &[Record]) {
    let ts_w = records
        .iter()
        .map(|r| r.timestamp.len())
        .max()
        .unwrap_or(16);

    for r in records {
        let comment = if r.comment.is_empty() {
            String::new()
        } else {
            format!("  ({})", r.comment)
        };
        println!(
            "{:<ts_w$} | {} | {}{}",
            r.timestamp,
            category_label(r.category),
            r.value,
            comment,
            ts_w = ts_w
        );
    }
}
