use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LoginGuard;
use crate::errors::AppResult;
use crate::storage::open_backend;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::{format_duration, now_local};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Guard { fail } = cmd {
        let backend = open_backend(cfg)?;
        let guard = LoginGuard::new(
            backend.as_ref(),
            &cfg.failed_attempt_file,
            cfg.login_cooldown_hours,
        );
        let now = now_local(cfg)?;

        if *fail {
            guard.record_failure(now)?;
            warning(format!(
                "Failed attempt recorded; login locked for {}h",
                cfg.login_cooldown_hours
            ));
            return Ok(());
        }

        match guard.cooldown_remaining(now)? {
            Some(left) => warning(format!("Login locked for another {}", format_duration(left))),
            None => success("Login allowed"),
        }
        if let Some(last) = guard.last_failure()? {
            info(format!("Last failed attempt: {}", last.format("%Y-%m-%d %H:%M:%S")));
        }
    }
    Ok(())
}
