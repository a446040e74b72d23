use super::oauth::{ClientAuth, OAuthClient, Provider, TokenStore};
use crate::config::Config;
use crate::core::calendar_summary::EventSource;
use crate::errors::AppResult;
use crate::http::{check, client};
use crate::models::calendar_event::CalendarEvent;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

const EVENTS_URL: &str = "https://www.googleapis.com/calendar/v3/calendars/primary/events";

pub static GOOGLE_CALENDAR: Provider = Provider {
    name: "calendar",
    authorize_endpoint: "https://accounts.google.com/o/oauth2/auth",
    token_endpoint: "https://oauth2.googleapis.com/token",
    scope: "https://www.googleapis.com/auth/calendar.readonly",
    client_auth: ClientAuth::Form,
    extra_authorize_params: &[
        ("access_type", "offline"),
        ("include_granted_scopes", "true"),
        ("prompt", "consent"),
    ],
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventsPage {
    #[serde(default)]
    items: Vec<CalendarEvent>,
    next_page_token: Option<String>,
}

pub struct CalendarClient {
    http: Client,
    oauth: OAuthClient,
    tokens: TokenStore,
}

impl CalendarClient {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            http: client()?,
            oauth: OAuthClient::new(&GOOGLE_CALENDAR, &cfg.calendar)?,
            tokens: TokenStore::new(Config::token_file()),
        })
    }

    pub fn authorize_url(&self) -> AppResult<Url> {
        self.oauth.authorize_url()
    }

    pub fn complete_login(&self, code: &str) -> AppResult<()> {
        let tokens = self.oauth.exchange_code(&self.http, code)?;
        self.tokens.put(self.oauth.provider_name(), &tokens)
    }

    /// Single (expanded) events of the primary calendar, ordered by start.
    pub fn list_events(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<CalendarEvent>> {
        let token = self.oauth.access_token(&self.http, &self.tokens)?;
        let time_min = from.to_rfc3339_opts(SecondsFormat::Micros, true);
        let time_max = to.to_rfc3339_opts(SecondsFormat::Micros, true);

        let mut events = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut query = vec![
                ("timeMin", time_min.as_str()),
                ("timeMax", time_max.as_str()),
                ("singleEvents", "true"),
                ("orderBy", "startTime"),
            ];
            if let Some(t) = page_token.as_deref() {
                query.push(("pageToken", t));
            }

            let resp = self
                .http
                .get(EVENTS_URL)
                .bearer_auth(&token)
                .query(&query)
                .send()?;
            let page: EventsPage = check(resp, "Calendar")?.json()?;
            events.extend(page.items);

            match page.next_page_token {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        debug!(count = events.len(), %from, %to, "calendar events fetched");
        Ok(events)
    }
}

impl EventSource for CalendarClient {
    fn events_between(
        &mut self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<CalendarEvent>> {
        self.list_events(from, to)
    }
}
