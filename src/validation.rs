/*!
 * Validation records and the two caption quality checks.
 *
 * A failed check produces one `ValidationError`, serialized as a single
 * JSON line on stdout. Validation failures are product output, not process
 * errors: a run that emits them still exits 0.
 */

use std::io::Write;

use anyhow::{Result, Context};
use serde::Serialize;

use crate::caption_processor::CaptionSegment;
use crate::coverage::{self, CoverageReport};

/// Kind of validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// Window coverage below the required percentage
    CaptionCoverage,
    /// Detected language differs from the accepted locale
    IncorrectLanguage,
}

/// One failed validation, emitted as a JSON line
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// Failure kind
    #[serde(rename = "type")]
    pub kind: ValidationKind,

    /// Human-readable failure description
    pub description: String,

    /// Optional opaque payload, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ValidationError {
    /// Coverage failure with both percentages at two-decimal precision
    pub fn caption_coverage(actual_percent: f64, required_percent: f64) -> Self {
        ValidationError {
            kind: ValidationKind::CaptionCoverage,
            description: format!(
                "Coverage too low: {:.2}% < required {:.2}%",
                actual_percent, required_percent
            ),
            details: None,
        }
    }

    /// Language mismatch failure
    pub fn incorrect_language(detected: &str) -> Self {
        ValidationError {
            kind: ValidationKind::IncorrectLanguage,
            description: format!("Detected language {} is not acceptable", detected),
            details: None,
        }
    }

    /// Write this record as one JSON line
    pub fn emit<W: Write>(&self, writer: &mut W) -> Result<()> {
        let json = serde_json::to_string(self).context("Failed to serialize validation error")?;
        writeln!(writer, "{}", json).context("Failed to write validation error")?;
        Ok(())
    }
}

/// Check window coverage against a required percentage. Returns the failure
/// record when coverage falls short, along with the measured report.
pub fn check_coverage(
    segments: &[CaptionSegment],
    window_start: f64,
    window_end: f64,
    required_percent: f64,
) -> (CoverageReport, Option<ValidationError>) {
    let report = coverage::window_coverage(segments, window_start, window_end);

    let error = if report.percent() < required_percent {
        Some(ValidationError::caption_coverage(
            report.percent(),
            required_percent,
        ))
    } else {
        None
    };

    (report, error)
}

/// Check a detected locale against the single accepted locale. Comparison is
/// exact; `en-US` and `en-us` are different locales here.
pub fn check_language(detected: &str, expected: &str) -> Option<ValidationError> {
    if detected != expected {
        Some(ValidationError::incorrect_language(detected))
    } else {
        None
    }
}
