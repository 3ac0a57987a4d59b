//! HTTP plumbing shared by every endpoint: URL building, the API key and
//! language query parameters, bounded retry and response decoding.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{FetchError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(250);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`TmdbClient`]
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub api_key: String,
    pub base_url: String,
    pub language: String,
    /// Retries after the first attempt, for transient failures only
    pub max_retries: u32,
    /// Delay before the first retry; grows linearly per attempt
    pub retry_backoff: Duration,
}

impl ClientSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_retries(mut self, max_retries: u32, retry_backoff: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_backoff = retry_backoff;
        self
    }

    /// Delay before retry number `attempt`, saturating at `Duration::MAX`
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        self.retry_backoff.saturating_mul(attempt)
    }
}

/// Error body TMDB sends alongside non-success statuses
#[derive(Debug, Deserialize)]
struct StatusBody {
    status_message: String,
}

pub struct TmdbClient {
    client: Client,
    settings: ClientSettings,
}

impl TmdbClient {
    /// Create a client with its own connection pool.
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Self::with_client(client, settings)
    }

    /// Create a client around an existing reqwest Client.
    pub fn with_client(client: Client, settings: ClientSettings) -> Result<Self> {
        if settings.api_key.trim().is_empty() {
            return Err(FetchError::Config("TMDB API key is empty".to_string()));
        }
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    /// GET `path` with the API key, language and `params`, retrying
    /// transient failures up to `max_retries` times.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(path);
        let mut attempt: u32 = 0;

        loop {
            match self.send_once(&url, params).await {
                Err(e) if e.is_transient() && attempt < self.settings.max_retries => {
                    attempt += 1;
                    let delay = self.settings.retry_delay(attempt);
                    warn!(
                        "Request to {} failed ({}), retry {}/{} in {:?}",
                        path, e, attempt, self.settings.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }

    async fn send_once<T: DeserializeOwned>(&self, url: &str, params: &[(&str, &str)]) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .query(&[
                ("api_key", self.settings.api_key.as_str()),
                ("language", self.settings.language.as_str()),
            ])
            .query(params)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<StatusBody>(&body)
                .map(|b| b.status_message)
                .unwrap_or(body);
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| FetchError::Decode {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        let result = TmdbClient::new(ClientSettings::new("  "));
        assert!(matches!(result, Err(FetchError::Config(_))));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = TmdbClient::new(ClientSettings::new("key").with_base_url("http://localhost:9/3/"))
            .unwrap();
        assert_eq!(client.url("/movie/popular"), "http://localhost:9/3/movie/popular");
    }

    #[test]
    fn test_retry_delay_grows_linearly() {
        let settings = ClientSettings::new("key").with_retries(3, Duration::from_millis(250));
        assert_eq!(settings.retry_delay(1), Duration::from_millis(250));
        assert_eq!(settings.retry_delay(3), Duration::from_millis(750));
    }

    #[test]
    fn test_retry_delay_saturates_on_huge_backoff() {
        let settings = ClientSettings::new("key").with_retries(u32::MAX, Duration::from_secs(u64::MAX));
        assert_eq!(settings.retry_delay(2), Duration::MAX);
        assert_eq!(settings.retry_delay(u32::MAX), Duration::MAX);
    }
}
