/*!
 * # capcheck - Caption Track Validator
 *
 * A Rust library for validating caption/subtitle tracks against quality gates.
 *
 * ## Features
 *
 * - Parse SRT and WebVTT caption files into timed text segments
 * - Measure caption coverage over a playback window
 * - Check the detected language of caption text against an accepted locale
 * - Emit structured validation-failure records as JSON lines
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `caption_processor`: Caption file parsing into timed segments
 * - `coverage`: Window-coverage calculation
 * - `validation`: Validation records and the two quality checks
 * - `detector`: Language-detection collaborator:
 *   - `detector::http`: HTTP endpoint client
 *   - `detector::mock`: Mock detector for tests
 * - `app_controller`: Validation run orchestration
 * - `language_utils`: Locale code utilities
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod caption_processor;
pub mod coverage;
pub mod detector;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use caption_processor::{CaptionFormat, CaptionSegment, CaptionTrack};
pub use coverage::{CoverageReport, window_coverage};
pub use detector::{HttpDetector, LanguageDetector, MockDetector};
pub use errors::DetectorError;
pub use validation::{ValidationError, ValidationKind};
