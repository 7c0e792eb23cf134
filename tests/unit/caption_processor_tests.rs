/*!
 * Tests for caption file parsing
 */

use std::path::PathBuf;
use capcheck::caption_processor::{CaptionFormat, CaptionTrack};

fn parse(content: &str, format: CaptionFormat) -> CaptionTrack {
    CaptionTrack::parse_str(content, format, PathBuf::from("test.captions"))
}

#[test]
fn test_formatFromPath_withKnownExtensions_shouldDetectCaseInsensitive() {
    assert_eq!(CaptionFormat::from_path("a.srt"), Some(CaptionFormat::Srt));
    assert_eq!(CaptionFormat::from_path("a.SRT"), Some(CaptionFormat::Srt));
    assert_eq!(CaptionFormat::from_path("a.vtt"), Some(CaptionFormat::Vtt));
    assert_eq!(CaptionFormat::from_path("b.VtT"), Some(CaptionFormat::Vtt));
}

#[test]
fn test_formatFromPath_withUnsupportedExtension_shouldReturnNone() {
    assert_eq!(CaptionFormat::from_path("a.txt"), None);
    assert_eq!(CaptionFormat::from_path("noextension"), None);
}

#[test]
fn test_parseSrt_withTwoEntries_shouldRoundTripTimesAndTexts() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:03,000 --> 00:00:04,500\nWorld\n";

    let track = parse(content, CaptionFormat::Srt);

    assert_eq!(track.segments.len(), 2);
    assert_eq!(track.segments[0].start, 1.0);
    assert_eq!(track.segments[0].end, 2.0);
    assert_eq!(track.segments[0].text, "Hello");
    assert_eq!(track.segments[1].start, 3.0);
    assert_eq!(track.segments[1].end, 4.5);
    assert_eq!(track.segments[1].text, "World");
}

#[test]
fn test_parseSrt_withMultiLineText_shouldJoinWithSpaces() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nHello\nthere\n\n";

    let track = parse(content, CaptionFormat::Srt);

    assert_eq!(track.segments.len(), 1);
    assert_eq!(track.segments[0].text, "Hello there");
}

#[test]
fn test_parseSrt_withShortMillisecondGroup_shouldDivideLiterally() {
    // A 1-digit millisecond capture is thousandths as written, not padded
    let content = "1\n00:00:01,5 --> 00:00:02,75\nHello\n\n";

    let track = parse(content, CaptionFormat::Srt);

    assert_eq!(track.segments.len(), 1);
    assert!((track.segments[0].start - 1.005).abs() < 1e-12);
    assert!((track.segments[0].end - 2.075).abs() < 1e-12);
}

#[test]
fn test_parseSrt_withoutTrailingBlankLine_shouldEmitFinalSegment() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nHello";

    let track = parse(content, CaptionFormat::Srt);

    assert_eq!(track.segments.len(), 1);
    assert_eq!(track.segments[0].text, "Hello");
}

#[test]
fn test_parseSrt_withMissingBlankBoundaries_shouldMergeBlocks() {
    // No blank lines: the second cue index and both texts all land in one
    // segment carrying the last timing values seen
    let content = "1\n00:00:01,000 --> 00:00:02,000\nHello\n2\n00:00:03,000 --> 00:00:04,000\nWorld\n";

    let track = parse(content, CaptionFormat::Srt);

    assert_eq!(track.segments.len(), 1);
    assert_eq!(track.segments[0].start, 3.0);
    assert_eq!(track.segments[0].end, 4.0);
    assert_eq!(track.segments[0].text, "Hello 2 World");
}

#[test]
fn test_parseSrt_withNumericCueText_shouldKeepItAsText() {
    // A bare number is only a cue index directly before a timing line
    let content = "1\n00:00:01,000 --> 00:00:02,000\n42\n\n";

    let track = parse(content, CaptionFormat::Srt);

    assert_eq!(track.segments.len(), 1);
    assert_eq!(track.segments[0].text, "42");
}

#[test]
fn test_parseSrt_withTimingButNoText_shouldEmitNothing() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\n\n";

    let track = parse(content, CaptionFormat::Srt);

    assert!(track.segments.is_empty());
}

#[test]
fn test_parseSrt_withMalformedTiming_shouldAbsorbLineAsText() {
    // A near-timing line that misses the marker syntax becomes caption text
    let content = "1\n00:00:01.000 -> 00:00:02.000\nHello\n\n";

    let track = parse(content, CaptionFormat::Srt);

    assert_eq!(track.segments.len(), 1);
    assert_eq!(track.segments[0].start, 0.0);
    assert_eq!(track.segments[0].end, 0.0);
    assert!(track.segments[0].text.contains("Hello"));
}

#[test]
fn test_parseVtt_withHeader_shouldKeepHeaderAsZeroTimedSegment() {
    let content = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nHello\n";

    let track = parse(content, CaptionFormat::Vtt);

    assert_eq!(track.segments.len(), 2);
    assert_eq!(track.segments[0].start, 0.0);
    assert_eq!(track.segments[0].end, 0.0);
    assert_eq!(track.segments[0].text, "WEBVTT");
    assert_eq!(track.segments[1].start, 1.0);
    assert_eq!(track.segments[1].end, 2.0);
    assert_eq!(track.segments[1].text, "Hello");
}

#[test]
fn test_parseVtt_withFractionalSeconds_shouldTruncateToWholeSeconds() {
    let content = "00:00:01.900 --> 00:00:02.500\nHello\n";

    let track = parse(content, CaptionFormat::Vtt);

    assert_eq!(track.segments.len(), 1);
    assert_eq!(track.segments[0].start, 1.0);
    assert_eq!(track.segments[0].end, 2.0);
}

#[test]
fn test_parseVtt_withMissingClockPart_shouldDegradeToZeroAndContinue() {
    let content = "00:01 --> 00:00:05.000\nLate\n\n00:00:06.000 --> 00:00:07.000\nNext\n";

    let track = parse(content, CaptionFormat::Vtt);

    assert_eq!(track.segments.len(), 2);
    assert_eq!(track.segments[0].start, 0.0);
    assert_eq!(track.segments[0].end, 5.0);
    assert_eq!(track.segments[0].text, "Late");
    assert_eq!(track.segments[1].start, 6.0);
    assert_eq!(track.segments[1].end, 7.0);
}

#[test]
fn test_parseVtt_withNonNumericComponents_shouldParseThemAsZero() {
    let content = "aa:bb:cc --> 00:01:03.000\nHello\n";

    let track = parse(content, CaptionFormat::Vtt);

    assert_eq!(track.segments.len(), 1);
    assert_eq!(track.segments[0].start, 0.0);
    assert_eq!(track.segments[0].end, 63.0);
}

#[test]
fn test_parseVtt_withHourLongTimestamps_shouldComputeElapsedSeconds() {
    let content = "01:02:03.000 --> 01:02:04.000\nHello\n";

    let track = parse(content, CaptionFormat::Vtt);

    assert_eq!(track.segments[0].start, 3723.0);
    assert_eq!(track.segments[0].end, 3724.0);
}

#[test]
fn test_joinedText_shouldConcatenateSegmentsWithNewlines() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:03,000 --> 00:00:04,000\nWorld\n";

    let track = parse(content, CaptionFormat::Srt);

    assert_eq!(track.joined_text(), "Hello\nWorld");
}

#[test]
fn test_joinedText_withEmptyTrack_shouldBeEmpty() {
    let track = parse("", CaptionFormat::Srt);

    assert!(track.segments.is_empty());
    assert_eq!(track.joined_text(), "");
}
