use crate::error::{ExtractError, Result};
use crate::exporters::ExportFormat;
use crate::filter::WATCH_LATER_URL;
use crate::utils::sanitize_filename;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Timing policy injected into the collection loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Blind wait after each scroll
    pub poll_interval: Duration,

    /// Consecutive rounds without new records before the list counts as exhausted
    pub stable_round_threshold: u32,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(default_poll_interval_ms()),
            stable_round_threshold: default_stable_round_threshold(),
        }
    }
}

/// Configuration for a full extract-and-export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Page to open in the driven browser
    #[serde(default = "default_list_url")]
    pub list_url: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Delay between scroll and next scan, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Empty rounds required before stopping
    #[serde(default = "default_stable_round_threshold")]
    pub stable_round_threshold: u32,

    /// Seconds to wait after opening the page, e.g. to sign in by hand
    #[serde(default)]
    pub login_wait_secs: u64,

    /// Root directory for exported files
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Formats to write after a successful extraction
    #[serde(default = "default_formats")]
    pub formats: Vec<ExportFormat>,

    /// Title used in exports and for the output file names
    #[serde(default = "default_list_title")]
    pub list_title: String,
}

fn default_list_url() -> String {
    WATCH_LATER_URL.to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_stable_round_threshold() -> u32 {
    3
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./output")
}

fn default_formats() -> Vec<ExportFormat> {
    vec![ExportFormat::Json, ExportFormat::Markdown, ExportFormat::Html]
}

fn default_list_title() -> String {
    "Watch Later".to_string()
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            list_url: default_list_url(),
            webdriver_url: default_webdriver_url(),
            poll_interval_ms: default_poll_interval_ms(),
            stable_round_threshold: default_stable_round_threshold(),
            login_wait_secs: 0,
            output_dir: default_output_dir(),
            formats: default_formats(),
            list_title: default_list_title(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the loop cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.stable_round_threshold == 0 {
            return Err(ExtractError::Config(
                "stable_round_threshold must be at least 1".to_string(),
            ));
        }
        if self.formats.is_empty() {
            return Err(ExtractError::Config(
                "at least one export format is required".to_string(),
            ));
        }
        if sanitize_filename(&self.list_title).is_empty() {
            return Err(ExtractError::Config(
                "list_title must contain at least one usable character".to_string(),
            ));
        }
        Ok(())
    }

    /// Timing policy for the collection loop
    pub fn collector(&self) -> CollectorConfig {
        CollectorConfig {
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            stable_round_threshold: self.stable_round_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.list_url, "https://www.youtube.com/playlist?list=WL");
        assert_eq!(config.collector(), CollectorConfig::default());
        assert_eq!(config.collector().poll_interval, Duration::from_millis(2000));
        assert_eq!(config.collector().stable_round_threshold, 3);
        assert_eq!(config.formats.len(), 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            ExtractorConfig::from_json(r#"{"poll_interval_ms": 10, "formats": ["markdown"]}"#)
                .unwrap();
        assert_eq!(config.poll_interval_ms, 10);
        assert_eq!(config.formats, vec![ExportFormat::Markdown]);
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert_eq!(config.list_title, "Watch Later");
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = ExtractorConfig::from_json(r#"{"stable_round_threshold": 0}"#).unwrap_err();
        assert!(matches!(err, ExtractError::Config(_)));
    }

    #[test]
    fn test_blank_title_rejected() {
        for json in [r#"{"list_title": ""}"#, r#"{"list_title": "   "}"#] {
            let err = ExtractorConfig::from_json(json).unwrap_err();
            assert!(matches!(err, ExtractError::Config(_)));
        }

        let config = ExtractorConfig {
            list_title: "  ".to_string(),
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"output_dir": "/tmp/wl", "login_wait_secs": 30}}"#).unwrap();

        let config = ExtractorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/wl"));
        assert_eq!(config.login_wait_secs, 30);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ExtractorConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }
}
