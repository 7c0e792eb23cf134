/*!
 * Tests for the language-detection seam
 */

use capcheck::detector::{LanguageDetector, MockDetector};
use capcheck::errors::DetectorError;

#[test]
fn test_detect_withReportingMock_shouldReturnLocale() {
    let detector = MockDetector::returning("en-US");

    let locale = tokio_test::block_on(detector.detect("Hello world")).unwrap();

    assert_eq!(locale, "en-US");
    assert_eq!(detector.request_count(), 1);
}

#[test]
fn test_detect_withFailingMock_shouldReturnRequestError() {
    let detector = MockDetector::failing();

    let result = tokio_test::block_on(detector.detect("Hello world"));

    assert!(matches!(result, Err(DetectorError::RequestFailed(_))));
}

#[test]
fn test_detectorError_display_shouldDescribeFailure() {
    let error = DetectorError::ApiError {
        status_code: 502,
        message: "bad gateway".to_string(),
    };

    let rendered = error.to_string();

    assert!(rendered.contains("502"));
    assert!(rendered.contains("bad gateway"));
}
