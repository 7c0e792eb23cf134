/*!
 * Error types for the capcheck application.
 *
 * This module contains custom error types for the language-detection seam,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when calling the language-detection endpoint.
///
/// All of these are recoverable from the run's perspective: detection
/// failure degrades to "language check skipped", never to a fatal exit and
/// never to a validation failure.
#[derive(Error, Debug)]
pub enum DetectorError {
    /// Error when making the detection request fails
    #[error("Detection request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing the detection response fails
    #[error("Failed to parse detection response: {0}")]
    ParseError(String),

    /// Error returned by the endpoint itself
    #[error("Detection endpoint responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the endpoint
        message: String,
    },
}
