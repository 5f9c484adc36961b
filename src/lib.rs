// Re-export modules
pub mod collector;
pub mod config;
pub mod crawlers;
pub mod error;
pub mod exporters;
pub mod filter;
pub mod handler;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use error::{ExtractError, Result};
pub use handler::{ExtractionRequest, ExtractionResponse};
pub use results::ExtractedRecord;

use crawlers::WebDriverPage;
use std::path::Path;
use std::time::Duration;

/// Builder for a single Watch Later extraction against a live browser
pub struct Extractor {
    config: config::ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor with default settings
    pub fn new() -> Self {
        Self {
            config: config::ExtractorConfig::default(),
        }
    }

    /// Replace all settings with the given configuration
    pub fn with_config(mut self, config: config::ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let config = config::ExtractorConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self> {
        let config = config::ExtractorConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Page to open before extracting
    pub fn with_list_url(mut self, url: impl Into<String>) -> Self {
        self.config.list_url = url.into();
        self
    }

    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.config.webdriver_url = url.into();
        self
    }

    /// Set the delay between scroll and the next scan
    pub fn with_poll_interval_ms(mut self, millis: u64) -> Self {
        self.config.poll_interval_ms = millis;
        self
    }

    /// Set how many empty rounds end the scan
    pub fn with_stable_rounds(mut self, rounds: u32) -> Self {
        self.config.stable_round_threshold = rounds;
        self
    }

    /// Pause after opening the page so the user can sign in
    pub fn with_login_wait(mut self, seconds: u64) -> Self {
        self.config.login_wait_secs = seconds;
        self
    }

    pub fn config(&self) -> &config::ExtractorConfig {
        &self.config
    }

    /// Open the list in a WebDriver session and run one extraction request.
    ///
    /// Only connection and navigation problems are returned as errors; once
    /// the page is open every outcome is an [`ExtractionResponse`].
    pub async fn run(self) -> Result<ExtractionResponse> {
        self.config.validate()?;

        let mut webdriver_url = self.config.webdriver_url.clone();
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(env_url) = std::env::var("WEBDRIVER_URL") {
            if !env_url.is_empty() {
                webdriver_url = env_url;
            }
        }

        let mut page = WebDriverPage::open(
            &webdriver_url,
            &self.config.list_url,
            Duration::from_secs(self.config.login_wait_secs),
        )
        .await?;

        let response = handler::handle_request(
            &mut page,
            &ExtractionRequest::ExtractList,
            &self.config.collector(),
        )
        .await;

        page.close().await;
        Ok(response)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let extractor = Extractor::new()
            .with_list_url("https://www.youtube.com/playlist?list=WL&pp=1")
            .with_webdriver_url("http://localhost:9515")
            .with_poll_interval_ms(500)
            .with_stable_rounds(5)
            .with_login_wait(20);

        let config = extractor.config();
        assert_eq!(config.list_url, "https://www.youtube.com/playlist?list=WL&pp=1");
        assert_eq!(config.webdriver_url, "http://localhost:9515");
        assert_eq!(config.collector().poll_interval, Duration::from_millis(500));
        assert_eq!(config.collector().stable_round_threshold, 5);
        assert_eq!(config.login_wait_secs, 20);
    }

    #[test]
    fn test_builder_from_config_str() {
        let extractor = Extractor::new()
            .with_config_str(r#"{"list_title": "Later"}"#)
            .unwrap();
        assert_eq!(extractor.config().list_title, "Later");
    }

    #[tokio::test]
    async fn test_invalid_config_fails_before_connecting() {
        let result = Extractor::new().with_stable_rounds(0).run().await;
        assert!(matches!(result, Err(ExtractError::Config(_))));
    }
}
