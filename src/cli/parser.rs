use crate::models::Category;
use clap::{Parser, Subcommand};

/// Command-line interface definition for lifepulse
#[derive(Parser)]
#[command(
    name = "lifepulse",
    version = env!("CARGO_PKG_VERSION"),
    about = "Personal life log: record mood, events and health notes, with Fitbit and calendar data alongside",
    long_about = None
)]
pub struct Cli {
    /// Override the local data directory (useful for tests or a second log)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Log filter for diagnostics on stderr (e.g. debug, lifepulse=trace)
    #[arg(global = true, long = "log-level")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and data directory
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Record an observation
    Add {
        #[arg(value_enum)]
        category: Category,

        value: String,

        /// When it happened (YYYY-MM-DDTHH:MM); defaults to now
        #[arg(long = "at")]
        at: Option<String>,

        #[arg(long = "comment", short = 'c', default_value = "")]
        comment: String,
    },

    /// Delete a record; every field must match exactly
    Del {
        timestamp: String,

        #[arg(value_enum)]
        category: Category,

        value: String,

        #[arg(long = "comment", short = 'c', default_value = "")]
        comment: String,
    },

    /// Show the most recent records, newest first
    List {
        #[arg(long, short = 'n', help = "How many records to show (default from config)")]
        limit: Option<usize>,

        #[arg(long = "all", help = "Show the whole log")]
        all: bool,
    },

    /// Show the latest mood entry
    LatestMood,

    /// Login rate limiting: show the cooldown or record a failed attempt
    Guard {
        #[arg(long = "fail", help = "Record a failed login attempt now")]
        fail: bool,
    },

    /// Backfill Sleep and Steps records for the last seven days from Fitbit
    Sync {
        #[arg(long = "force", help = "Sync even if the last sync is less than a day old")]
        force: bool,
    },

    /// Fitbit connection and data
    Fitbit {
        #[command(subcommand)]
        action: FitbitAction,
    },

    /// Google Calendar connection and weekly summary
    Calendar {
        #[command(subcommand)]
        action: CalendarAction,
    },
}

#[derive(Subcommand)]
pub enum FitbitAction {
    /// Print the authorization URL to open in a browser
    Login,
    /// Finish authorization with the code from the redirect
    Callback { code: String },
    /// Steps and sleep for today
    Today,
}

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Print the authorization URL to open in a browser
    Login,
    /// Finish authorization with the code from the redirect
    Callback { code: String },
    /// List this week's events
    Events,
    /// Hours per category for this week and last week
    Summary {
        #[arg(long = "json", help = "Print the summary as JSON")]
        json: bool,
    },
}
