//! Shared blocking HTTP plumbing for cloud storage and the API clients.

use crate::errors::{AppError, AppResult};
use reqwest::blocking::{Client, Response};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(30);

pub fn client() -> AppResult<Client> {
    Ok(Client::builder().timeout(TIMEOUT).build()?)
}

/// Turn a non-2xx reply into `AppError::Api` with the body for context.
pub fn check(resp: Response, service: &'static str) -> AppResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    Err(AppError::Api {
        service,
        status: status.as_u16(),
        body: resp.text().unwrap_or_default(),
    })
}
