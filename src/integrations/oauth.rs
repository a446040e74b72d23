//! OAuth 2.0 authorization-code flow shared by the Fitbit and Google
//! Calendar clients, plus the on-disk token file.

use crate::config::OAuthClientConfig;
use crate::errors::{AppError, AppResult};
use crate::http::check;
use chrono::{DateTime, Duration, Utc};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_at: DateTime<Utc>,
}

impl OAuthTokens {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: i64,
}

impl TokenResponse {
    /// Google omits the refresh token on refresh; keep the previous one then.
    fn into_tokens(self, previous_refresh: Option<String>, now: DateTime<Utc>) -> OAuthTokens {
        OAuthTokens {
            access_token: self.access_token,
            refresh_token: self.refresh_token.or(previous_refresh),
            expires_at: now + Duration::seconds(self.expires_in),
        }
    }
}

/// How the client credentials travel to the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientAuth {
    /// HTTP basic auth header (Fitbit).
    Basic,
    /// `client_id` / `client_secret` form fields (Google).
    Form,
}

/// Static description of one provider.
pub struct Provider {
    pub name: &'static str,
    pub authorize_endpoint: &'static str,
    pub token_endpoint: &'static str,
    pub scope: &'static str,
    pub client_auth: ClientAuth,
    pub extra_authorize_params: &'static [(&'static str, &'static str)],
}

pub struct OAuthClient {
    provider: &'static Provider,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl OAuthClient {
    pub fn new(provider: &'static Provider, cfg: &OAuthClientConfig) -> AppResult<Self> {
        let missing = |what: &str| {
            AppError::Config(format!("{} {} is not configured", provider.name, what))
        };
        Ok(Self {
            provider,
            client_id: cfg.client_id.clone().ok_or_else(|| missing("client_id"))?,
            client_secret: cfg
                .client_secret
                .clone()
                .ok_or_else(|| missing("client_secret"))?,
            redirect_uri: cfg.redirect_uri.clone(),
        })
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name
    }

    /// URL the user opens in a browser to grant access.
    pub fn authorize_url(&self) -> AppResult<Url> {
        let mut params = vec![
            ("response_type", "code"),
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("scope", self.provider.scope),
        ];
        params.extend(self.provider.extra_authorize_params.iter().copied());

        Url::parse_with_params(self.provider.authorize_endpoint, &params)
            .map_err(|e| AppError::Config(format!("invalid authorize endpoint: {e}")))
    }

    pub fn exchange_code(&self, http: &Client, code: &str) -> AppResult<OAuthTokens> {
        let resp = self.request_token(
            http,
            &[
                ("grant_type", "authorization_code"),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("code", code),
            ],
        )?;
        info!(provider = self.provider.name, "authorization code exchanged");
        Ok(resp.into_tokens(None, Utc::now()))
    }

    pub fn refresh(&self, http: &Client, refresh_token: &str) -> AppResult<OAuthTokens> {
        let resp = self.request_token(
            http,
            &[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ],
        )?;
        debug!(provider = self.provider.name, "access token refreshed");
        Ok(resp.into_tokens(Some(refresh_token.to_string()), Utc::now()))
    }

    fn request_token(&self, http: &Client, form: &[(&str, &str)]) -> AppResult<TokenResponse> {
        let mut fields: Vec<(&str, &str)> = form.to_vec();
        let mut req = http.post(self.provider.token_endpoint);

        match self.provider.client_auth {
            ClientAuth::Basic => {
                req = req.basic_auth(&self.client_id, Some(&self.client_secret));
            }
            ClientAuth::Form => {
                fields.push(("client_id", self.client_id.as_str()));
                fields.push(("client_secret", self.client_secret.as_str()));
            }
        }

        let resp = req.form(&fields).send()?;
        Ok(check(resp, self.provider.name)?.json()?)
    }

    /// A usable access token: the stored one, refreshed first if expired.
    ///
    /// Anything short of that means the user has to log in again.
    pub fn access_token(&self, http: &Client, store: &TokenStore) -> AppResult<String> {
        let required = || AppError::AuthorizationRequired(self.provider.name);

        let tokens = store.get(self.provider.name)?.ok_or_else(required)?;
        if !tokens.is_expired(Utc::now()) {
            return Ok(tokens.access_token);
        }

        let refresh_token = tokens.refresh_token.as_deref().ok_or_else(required)?;
        match self.refresh(http, refresh_token) {
            Ok(fresh) => {
                store.put(self.provider.name, &fresh)?;
                Ok(fresh.access_token)
            }
            Err(e) => {
                warn!(provider = self.provider.name, error = %e, "token refresh failed");
                Err(required())
            }
        }
    }
}

/// Tokens of every provider, kept as one JSON object keyed by provider name.
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> AppResult<BTreeMap<String, OAuthTokens>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn get(&self, provider: &str) -> AppResult<Option<OAuthTokens>> {
        Ok(self.read_all()?.remove(provider))
    }

    pub fn put(&self, provider: &str, tokens: &OAuthTokens) -> AppResult<()> {
        let mut all = self.read_all()?;
        all.insert(provider.to_string(), tokens.clone());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&all)?)?;
        Ok(())
    }
}
