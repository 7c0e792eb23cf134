use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use log::error;

use crate::detector::LanguageDetector;
use crate::errors::DetectorError;

/// Detection response from the language endpoint
#[derive(Debug, Deserialize)]
struct DetectionResponse {
    /// Detected locale code, e.g. `en-US`
    lang: String,
}

/// HTTP client for a language-detection endpoint.
///
/// The endpoint contract: POST the raw caption text as a `text/plain` body,
/// receive a JSON object with a string field `lang`. One request per run,
/// no retries.
#[derive(Debug)]
pub struct HttpDetector {
    /// Endpoint URL the caption text is posted to
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
}

impl HttpDetector {
    /// Create a new detector for the given endpoint URL
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl LanguageDetector for HttpDetector {
    async fn detect(&self, text: &str) -> Result<String, DetectorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(text.to_string())
            .send()
            .await
            .map_err(|e| DetectorError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Language endpoint error ({}): {}", status, error_text);
            return Err(DetectorError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        // Get the raw response text first, then decode
        let response_text = response
            .text()
            .await
            .map_err(|e| DetectorError::RequestFailed(e.to_string()))?;

        let detection: DetectionResponse = serde_json::from_str(&response_text)
            .map_err(|e| DetectorError::ParseError(e.to_string()))?;

        Ok(detection.lang)
    }
}
