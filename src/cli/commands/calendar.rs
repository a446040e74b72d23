use crate::cli::parser::{CalendarAction, Commands};
use crate::config::Config;
use crate::core::calendar_summary::{OTHER, WeeklySummary, event_lines, week_range, weekly_summary};
use crate::errors::{AppError, AppResult};
use crate::integrations::calendar::CalendarClient;
use crate::ui::messages::{header, info, success, warning};
use chrono::Utc;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { action } = cmd {
        let mut client = CalendarClient::from_config(cfg)?;

        let result = match action {
            CalendarAction::Login => {
                info("Open this URL and authorize access:");
                println!("{}", client.authorize_url()?);
                info("Then run `lifepulse calendar callback <code>` with the code from the redirect.");
                Ok(())
            }
            CalendarAction::Callback { code } => client
                .complete_login(code)
                .map(|_| success("Google Calendar connected.")),
            CalendarAction::Events => print_events(&client),
            CalendarAction::Summary { json } => {
                weekly_summary(&mut client, &cfg.calendar_events, Utc::now()).and_then(|s| {
                    if *json {
                        println!("{}", serde_json::to_string_pretty(&s)?);
                    } else {
                        print_summary(&s);
                    }
                    Ok(())
                })
            }
        };

        match result {
            Err(e @ AppError::AuthorizationRequired(_)) => warning(e),
            other => other?,
        }
    }
    Ok(())
}

fn print_events(client: &CalendarClient) -> AppResult<()> {
    let (from, to) = week_range(Utc::now(), 0);
    let lines = event_lines(&client.list_events(from, to)?);

    if lines.is_empty() {
        info("No events this week.");
        return Ok(());
    }

    header("This week");
    for l in lines {
        println!("{:<24} {:>5.1}h  {}", l.start, l.duration, l.title);
    }
    Ok(())
}

fn print_summary(s: &WeeklySummary) {
    header("Calendar hours");
    println!(
        "{:<16} {:>9} {:>9} {:>9} {:>7}",
        "Category", "Done", "Planned", "Last wk", "Target"
    );

    for cat in &s.current_week.categories {
        let previous = s
            .previous_week
            .category(&cat.name)
            .map(|c| c.hours.total)
            .unwrap_or(0.0);
        let target = s
            .targets
            .iter()
            .find(|(name, _)| *name == cat.name)
            .map(|(_, t)| format!("{t:.1}"))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<16} {:>9.1} {:>9.1} {:>9.1} {:>7}",
            cat.name, cat.hours.completed, cat.hours.scheduled, previous, target
        );
    }

    println!(
        "{:<16} {:>9.1} {:>9.1} {:>9.1} {:>7.1}",
        format!("Total (no {OTHER})"),
        s.current_week.total.completed,
        s.current_week.total.scheduled,
        s.previous_week.total.total,
        s.target_total
    );
}
