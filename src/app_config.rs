use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use url::Url;

use crate::language_utils;

/// Application configuration module
/// This module handles the validation run configuration: the accepted
/// locale, the playback window and coverage threshold, and the language
/// detection endpoint. Values come from an optional JSON config file with
/// command-line overrides applied on top.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// The single accepted locale for caption text (e.g. "en-US")
    #[serde(default = "default_expected_language")]
    pub expected_language: String,

    /// Playback window the coverage check measures against
    #[serde(default)]
    pub window: WindowConfig,

    /// Required coverage percentage (0-100)
    #[serde(default)]
    pub required_coverage: f64,

    /// Language detection endpoint config
    #[serde(default)]
    pub detector: DetectorConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Playback window in seconds
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct WindowConfig {
    // @field: Window start in seconds
    #[serde(default)]
    pub start: f64,

    // @field: Window end in seconds
    #[serde(default)]
    pub end: f64,
}

/// Language detection endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DetectorConfig {
    // @field: Endpoint URL the caption text is posted to
    #[serde(default = "String::new")]
    pub endpoint: String,

    // @field: Request timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_expected_language() -> String {
    "en-US".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Config {
            expected_language: default_expected_language(),
            window: WindowConfig::default(),
            required_coverage: 0.0,
            detector: DetectorConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Validate the configuration after loading and overriding
    pub fn validate(&self) -> Result<()> {
        if self.detector.endpoint.is_empty() {
            return Err(anyhow!("Language detection endpoint is required"));
        }

        Url::parse(&self.detector.endpoint).with_context(|| {
            format!("Invalid detection endpoint URL: {}", self.detector.endpoint)
        })?;

        if !(0.0..=100.0).contains(&self.required_coverage) {
            return Err(anyhow!(
                "Required coverage must be between 0 and 100, got {}",
                self.required_coverage
            ));
        }

        language_utils::validate_locale(&self.expected_language)
            .with_context(|| format!("Invalid expected language: {}", self.expected_language))?;

        Ok(())
    }
}
