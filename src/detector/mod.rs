/*!
 * Language-detection collaborator interface.
 *
 * Detection is an external judgment call: this crate only defines the seam
 * and the HTTP client that speaks it. A detector receives the raw caption
 * text and returns a locale code such as `en-US`; whether that judgment is
 * correct is the endpoint's business, not ours.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::DetectorError;

/// Common trait for language detectors
///
/// The validation orchestrator holds a detector behind this trait so the
/// HTTP implementation and the test mock are interchangeable.
#[async_trait]
pub trait LanguageDetector: Send + Sync + Debug {
    /// Detect the language of the given text
    ///
    /// # Arguments
    /// * `text` - The caption text to classify
    ///
    /// # Returns
    /// * `Result<String, DetectorError>` - A locale code like `en-US`, or an error
    async fn detect(&self, text: &str) -> Result<String, DetectorError>;
}

pub mod http;
pub mod mock;

pub use http::HttpDetector;
pub use mock::MockDetector;
