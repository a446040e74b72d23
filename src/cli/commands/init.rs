use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::open_backend;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Creates the config directory, a default configuration file (kept if one
/// already exists) and the data directory.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.data_dir.clone())?;

    let mut cfg = Config::load()?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = Some(dir.clone());
    }
    let backend = open_backend(&cfg)?;

    println!("📄 Config file : {}", path.display());
    println!("🗄️  Data store  : {}", backend.describe());
    println!("📝 Log blob    : {}", cfg.data_file);
    success("lifepulse initialization completed!");
    Ok(())
}
