use super::oauth::{ClientAuth, OAuthClient, Provider, TokenStore};
use crate::config::Config;
use crate::core::sync::{DailyFitness, FitnessSource};
use crate::errors::AppResult;
use crate::http::{check, client};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

const API_BASE: &str = "https://api.fitbit.com";

pub static FITBIT: Provider = Provider {
    name: "fitbit",
    authorize_endpoint: "https://www.fitbit.com/oauth2/authorize",
    token_endpoint: "https://api.fitbit.com/oauth2/token",
    scope: "activity sleep heartrate weight",
    client_auth: ClientAuth::Basic,
    extra_authorize_params: &[],
};

#[derive(Debug, Default, Deserialize)]
struct ActivityDay {
    #[serde(default)]
    summary: ActivitySummary,
}

#[derive(Debug, Default, Deserialize)]
struct ActivitySummary {
    #[serde(default)]
    steps: u64,
}

#[derive(Debug, Default, Deserialize)]
struct SleepDay {
    #[serde(default)]
    summary: SleepSummary,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SleepSummary {
    #[serde(default)]
    total_minutes_asleep: u64,
}

pub struct FitbitClient {
    http: Client,
    oauth: OAuthClient,
    tokens: TokenStore,
}

impl FitbitClient {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            http: client()?,
            oauth: OAuthClient::new(&FITBIT, &cfg.fitbit)?,
            tokens: TokenStore::new(Config::token_file()),
        })
    }

    pub fn authorize_url(&self) -> AppResult<Url> {
        self.oauth.authorize_url()
    }

    /// Finish the login started by `authorize_url` with the returned code.
    pub fn complete_login(&self, code: &str) -> AppResult<()> {
        let tokens = self.oauth.exchange_code(&self.http, code)?;
        self.tokens.put(self.oauth.provider_name(), &tokens)
    }

    /// Steps and hours asleep for one day.
    pub fn daily(&self, date: NaiveDate) -> AppResult<DailyFitness> {
        let token = self.oauth.access_token(&self.http, &self.tokens)?;
        let day = date.format("%Y-%m-%d");

        let activity: ActivityDay = self.get_json(
            &token,
            &format!("{API_BASE}/1/user/-/activities/date/{day}.json"),
            "Activity",
        )?;
        let sleep: SleepDay = self.get_json(
            &token,
            &format!("{API_BASE}/1.2/user/-/sleep/date/{day}.json"),
            "Sleep",
        )?;

        debug!(%date, steps = activity.summary.steps, "fitbit day fetched");
        Ok(DailyFitness {
            steps: activity.summary.steps,
            sleep_hours: sleep.summary.total_minutes_asleep as f64 / 60.0,
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        token: &str,
        url: &str,
        service: &'static str,
    ) -> AppResult<T> {
        let resp = self.http.get(url).bearer_auth(token).send()?;
        Ok(check(resp, service)?.json()?)
    }
}

impl FitnessSource for FitbitClient {
    fn daily_summary(&mut self, date: NaiveDate) -> AppResult<DailyFitness> {
        self.daily(date)
    }
}
