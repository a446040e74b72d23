use super::BlobStore;
use crate::errors::{AppError, AppResult};
use crate::http::{check, client};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use tracing::debug;
use url::Url;

const API_BASE: &str = "https://storage.googleapis.com/storage/v1/b";
const SERVICE: &str = "Cloud Storage";
const UPLOAD_BASE: &str = "https://storage.googleapis.com/upload/storage/v1/b";

/// Blobs stored as objects in a Google Cloud Storage bucket (JSON API).
pub struct GcsStore {
    client: Client,
    project: String,
    bucket: String,
    token: String,
}

impl GcsStore {
    pub fn new(project: &str, bucket: &str, token: Option<String>) -> AppResult<Self> {
        let token = token
            .or_else(|| std::env::var("GCS_ACCESS_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(
                    "cloud storage needs an access token (gcs.access_token or GCS_ACCESS_TOKEN)"
                        .into(),
                )
            })?;

        Ok(Self {
            client: client()?,
            project: project.to_string(),
            bucket: bucket.to_string(),
            token,
        })
    }

    fn object_url(&self, name: &str) -> AppResult<Url> {
        let mut url = Url::parse(API_BASE).map_err(|e| AppError::Storage(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Storage("invalid storage base url".into()))?
            .extend([self.bucket.as_str(), "o", name]);
        Ok(url)
    }

    fn get(&self, url: Url) -> AppResult<Response> {
        Ok(self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header("x-goog-user-project", &self.project)
            .send()?)
    }
}

impl BlobStore for GcsStore {
    fn read(&self, name: &str) -> AppResult<Option<String>> {
        let mut url = self.object_url(name)?;
        url.query_pairs_mut().append_pair("alt", "media");

        let resp = self.get(url)?;
        if resp.status() == StatusCode::NOT_FOUND {
            debug!(bucket = %self.bucket, name, "object missing");
            return Ok(None);
        }
        let text = check(resp, SERVICE)?.text()?;
        debug!(bucket = %self.bucket, name, bytes = text.len(), "object read");
        Ok(Some(text))
    }

    fn write(&self, name: &str, contents: &str) -> AppResult<()> {
        let mut url = Url::parse(UPLOAD_BASE).map_err(|e| AppError::Storage(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Storage("invalid storage upload url".into()))?
            .extend([self.bucket.as_str(), "o"]);
        url.query_pairs_mut()
            .append_pair("uploadType", "media")
            .append_pair("name", name);

        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.token)
            .header("x-goog-user-project", &self.project)
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(contents.to_string())
            .send()?;
        check(resp, SERVICE)?;
        debug!(bucket = %self.bucket, name, bytes = contents.len(), "object written");
        Ok(())
    }

    fn exists(&self, name: &str) -> AppResult<bool> {
        let resp = self.get(self.object_url(name)?)?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        check(resp, SERVICE)?;
        Ok(true)
    }

    fn describe(&self) -> String {
        format!("gs://{}", self.bucket)
    }
}
