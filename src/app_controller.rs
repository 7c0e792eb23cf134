use anyhow::{Result, anyhow};
use log::{debug, error};
use std::io;
use std::path::Path;

use crate::app_config::Config;
use crate::caption_processor::{CaptionFormat, CaptionTrack};
use crate::detector::{HttpDetector, LanguageDetector};
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::validation::{self, ValidationError};

// @module: Validation run orchestration

/// Main application controller for caption validation
///
/// Owns no complex state: one call sequences parse, coverage check, text
/// extraction, the external language check, and result emission.
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Language detection collaborator
    detector: Box<dyn LanguageDetector>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let detector = Box::new(HttpDetector::new(
            config.detector.endpoint.clone(),
            config.detector.timeout_secs,
        ));

        Ok(Self { config, detector })
    }

    /// Create a controller with a caller-supplied detector - used by tests
    pub fn with_detector(config: Config, detector: Box<dyn LanguageDetector>) -> Self {
        Self { config, detector }
    }

    /// Run both checks against a caption file and return the failure records
    /// in check order. A failed language detection degrades to "check
    /// skipped" with an operator log line; it never produces a record.
    pub async fn validate_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<ValidationError>> {
        let path = path.as_ref();

        let format = CaptionFormat::from_path(path)
            .ok_or_else(|| anyhow!("Unsupported caption file type: {:?}", path))?;

        if !FileManager::file_exists(path) {
            return Err(anyhow!("Caption file does not exist: {:?}", path));
        }

        let content = FileManager::read_to_string(path)?;
        let track = CaptionTrack::parse_str(&content, format, path.to_path_buf());
        debug!(
            "Parsed {} segments from {} file {:?}",
            track.segments.len(),
            format,
            path
        );

        let mut failures = Vec::new();

        let (report, coverage_error) = validation::check_coverage(
            &track.segments,
            self.config.window.start,
            self.config.window.end,
            self.config.required_coverage,
        );
        debug!(
            "Caption coverage: {:.2}% (required {:.2}%)",
            report.percent(),
            self.config.required_coverage
        );
        if let Some(failure) = coverage_error {
            failures.push(failure);
        }

        let text = track.joined_text();
        match self.detector.detect(&text).await {
            Ok(detected) => {
                let language_name = language_utils::get_language_name(&detected)
                    .unwrap_or_else(|_| "unknown".to_string());
                debug!("Detected language: {} ({})", detected, language_name);

                if let Some(failure) =
                    validation::check_language(&detected, &self.config.expected_language)
                {
                    failures.push(failure);
                }
            }
            Err(e) => {
                // Detection unavailable: degraded run, language check skipped
                error!("Error detecting language: {}", e);
            }
        }

        Ok(failures)
    }

    /// Run the checks and print each failure as one JSON line on stdout
    pub async fn run<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let failures = self.validate_file(path).await?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for failure in &failures {
            failure.emit(&mut handle)?;
        }

        Ok(())
    }
}
