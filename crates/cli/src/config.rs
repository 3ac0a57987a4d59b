use std::time::Duration;

use serde::Deserialize;
use session::SessionSettings;
use tmdb_client::ClientSettings;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// TMDB v3 API key
    pub tmdb_api_key: String,

    #[serde(default = "default_base_url")]
    pub tmdb_base_url: String,

    #[serde(default = "default_image_base_url")]
    pub tmdb_image_base_url: String,

    #[serde(default = "default_language")]
    pub tmdb_language: String,

    /// Region used when no --region flag is given
    #[serde(default = "default_region")]
    pub default_region: String,

    /// Retries after the first attempt for transient failures
    #[serde(default = "default_fetch_retries")]
    pub fetch_retries: u32,

    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Width the drag threshold is measured against
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
}

fn default_base_url() -> String {
    tmdb_client::DEFAULT_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    catalog::DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_language() -> String {
    tmdb_client::DEFAULT_LANGUAGE.to_string()
}

fn default_region() -> String {
    catalog::DEFAULT_REGION.to_string()
}

fn default_fetch_retries() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    250
}

fn default_viewport_width() -> f32 {
    400.0
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env`, if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<AppConfig>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings::new(self.tmdb_api_key.clone())
            .with_base_url(self.tmdb_base_url.clone())
            .with_language(self.tmdb_language.clone())
            .with_retries(
                self.fetch_retries,
                Duration::from_millis(self.retry_backoff_ms),
            )
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            image_base_url: self.tmdb_image_base_url.clone(),
            viewport_width: self.viewport_width,
            ..SessionSettings::default()
        }
    }
}
