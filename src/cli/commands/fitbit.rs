use crate::cli::parser::{Commands, FitbitAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::integrations::fitbit::FitbitClient;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::now_local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fitbit { action } = cmd {
        let client = FitbitClient::from_config(cfg)?;

        match action {
            FitbitAction::Login => {
                info("Open this URL and authorize access:");
                println!("{}", client.authorize_url()?);
                info("Then run `lifepulse fitbit callback <code>` with the code from the redirect.");
            }
            FitbitAction::Callback { code } => {
                client.complete_login(code)?;
                success("Fitbit connected.");
            }
            FitbitAction::Today => match client.daily(now_local(cfg)?.date()) {
                Ok(day) => {
                    println!("Steps: {}", day.steps);
                    println!("Sleep: {:.1} h", day.sleep_hours);
                }
                Err(e @ AppError::AuthorizationRequired(_)) => warning(e),
                Err(e) => return Err(e),
            },
        }
    }
    Ok(())
}
