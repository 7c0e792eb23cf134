/*!
 * Mock language detector for testing.
 *
 * This module provides a detector that simulates endpoint behaviors:
 * - `MockDetector::returning("en-US")` - Always reports the given locale
 * - `MockDetector::failing()` - Always fails with a transport-style error
 * - `MockDetector::unparseable()` - Always fails with a decode-style error
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::detector::LanguageDetector;
use crate::errors::DetectorError;

/// Behavior mode for the mock detector
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always report this locale
    Reporting(String),
    /// Always fail as if the request could not be sent
    Failing,
    /// Always fail as if the response was not valid JSON
    Unparseable,
}

/// Mock detector for testing the language check
#[derive(Debug)]
pub struct MockDetector {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of detect calls made
    request_count: Arc<AtomicUsize>,
}

impl MockDetector {
    /// Create a new mock with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock that always reports the given locale
    pub fn returning(locale: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reporting(locale.into()))
    }

    /// Create a mock that always fails with a transport error
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that always fails with a decode error
    pub fn unparseable() -> Self {
        Self::new(MockBehavior::Unparseable)
    }

    /// How many detect calls this mock has received
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageDetector for MockDetector {
    async fn detect(&self, _text: &str) -> Result<String, DetectorError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Reporting(locale) => Ok(locale.clone()),
            MockBehavior::Failing => Err(DetectorError::RequestFailed(
                "Simulated connection failure".to_string(),
            )),
            MockBehavior::Unparseable => Err(DetectorError::ParseError(
                "Simulated malformed response body".to_string(),
            )),
        }
    }
}
