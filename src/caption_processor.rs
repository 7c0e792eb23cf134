use std::fmt;
use std::path::{Path, PathBuf};
use regex::Regex;
use once_cell::sync::Lazy;
use anyhow::{Result, anyhow};
use log::warn;

// @module: Caption file parsing into timed segments

// @const: SRT timing line regex (comma millisecond separator)
static SRT_TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}):(\d{2}):(\d{2}),(\d+) --> (\d{2}):(\d{2}):(\d{2}),(\d+)").unwrap()
});

/// Caption file format, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionFormat {
    /// SubRip (.srt)
    Srt,
    /// WebVTT (.vtt)
    Vtt,
}

impl CaptionFormat {
    /// Detect the caption format from a file extension (case-insensitive)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "srt" => Some(CaptionFormat::Srt),
            "vtt" => Some(CaptionFormat::Vtt),
            _ => None,
        }
    }
}

impl fmt::Display for CaptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CaptionFormat::Srt => write!(f, "srt"),
            CaptionFormat::Vtt => write!(f, "vtt"),
        }
    }
}

// @struct: Single timed caption segment
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionSegment {
    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,

    // @field: Caption text, block lines joined with a single space
    pub text: String,
}

impl CaptionSegment {
    /// Creates a new caption segment. No time-range validation is applied;
    /// an inverted or empty range is legal input for the coverage math.
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        CaptionSegment {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Collection of caption segments in file order
#[derive(Debug)]
pub struct CaptionTrack {
    /// Source filename
    pub source_file: PathBuf,

    /// Detected caption format
    pub format: CaptionFormat,

    /// Segments in file order (never re-sorted by time)
    pub segments: Vec<CaptionSegment>,
}

impl CaptionTrack {
    /// Parse caption file content into a track.
    ///
    /// One pass over the lines with two buffers: the pending text lines and
    /// the most recently seen timing values. A blank line closes the open
    /// segment when text is pending; a timing line records start/end for the
    /// next close; everything else accumulates as text. Lines the active
    /// format does not recognize as timing markers are absorbed as text
    /// rather than rejected.
    pub fn parse_str(content: &str, format: CaptionFormat, source_file: PathBuf) -> Self {
        let mut segments = Vec::new();
        let mut pending_text: Vec<String> = Vec::new();
        let mut start = 0.0_f64;
        let mut end = 0.0_f64;

        let mut lines = content.lines().peekable();
        while let Some(raw_line) = lines.next() {
            let line = raw_line.trim();

            if line.is_empty() {
                if !pending_text.is_empty() {
                    segments.push(CaptionSegment::new(start, end, pending_text.join(" ")));
                    pending_text.clear();
                }
                continue;
            }

            match format {
                CaptionFormat::Srt => {
                    if let Some((timing_start, timing_end)) = parse_srt_timing(line) {
                        start = timing_start;
                        end = timing_end;
                        continue;
                    }

                    // Cue index: a bare number directly before a timing line,
                    // with nothing pending. A numeric line anywhere else is
                    // ordinary caption text.
                    if pending_text.is_empty()
                        && line.parse::<usize>().is_ok()
                        && lines
                            .peek()
                            .is_some_and(|next| SRT_TIMING_REGEX.is_match(next.trim()))
                    {
                        continue;
                    }
                }
                CaptionFormat::Vtt => {
                    if line.contains("-->") {
                        let (timing_start, timing_end) = parse_vtt_timing(line);
                        start = timing_start;
                        end = timing_end;
                        continue;
                    }
                }
            }

            pending_text.push(line.to_string());
        }

        // No trailing blank line: close the final segment with the last timing
        if !pending_text.is_empty() {
            segments.push(CaptionSegment::new(start, end, pending_text.join(" ")));
        }

        CaptionTrack {
            source_file,
            format,
            segments,
        }
    }

    /// All segment texts in file order, newline-joined, for language detection
    pub fn joined_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for CaptionTrack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Caption Track")?;
        writeln!(f, "Source: {:?}", self.source_file)?;
        writeln!(f, "Format: {}", self.format)?;
        writeln!(f, "Segments: {}", self.segments.len())?;
        Ok(())
    }
}

/// Parse an SRT timing line (`HH:MM:SS,mmm --> HH:MM:SS,mmm`) to start/end
/// seconds. Returns None when the line is not a timing marker, in which case
/// the caller treats it as ordinary text.
fn parse_srt_timing(line: &str) -> Option<(f64, f64)> {
    let caps = SRT_TIMING_REGEX.captures(line)?;
    Some((srt_clock_seconds(&caps, 1), srt_clock_seconds(&caps, 5)))
}

/// Convert one side of a matched SRT timing line to elapsed seconds.
///
/// The millisecond group may be 1-3+ digits and is divided by 1000 as
/// captured, with no zero-padding of short values ("5" is 0.005 s). Inherited
/// input-compatibility behavior.
fn srt_clock_seconds(caps: &regex::Captures, start_idx: usize) -> f64 {
    let group = |idx: usize| -> u64 {
        caps.get(start_idx + idx)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0))
    };

    let hours = group(0);
    let minutes = group(1);
    let seconds = group(2);
    let millis = group(3);

    (hours * 3600 + minutes * 60 + seconds) as f64 + millis as f64 / 1000.0
}

/// Parse a WebVTT timing line. Each malformed side degrades to 0 seconds with
/// a warning; a timing line never aborts the file.
fn parse_vtt_timing(line: &str) -> (f64, f64) {
    let sides: Vec<&str> = line.split(" --> ").collect();
    let start = vtt_side_seconds(sides.first().copied().unwrap_or(""), line);
    let end = vtt_side_seconds(sides.get(1).copied().unwrap_or(""), line);
    (start, end)
}

fn vtt_side_seconds(side: &str, line: &str) -> f64 {
    match vtt_clock_seconds(side) {
        Ok(seconds) => seconds,
        Err(e) => {
            warn!("Malformed WebVTT timing '{}': {}", line, e);
            0.0
        }
    }
}

/// Convert a WebVTT clock value (`HH:MM:SS.fff`) to elapsed seconds.
///
/// Exactly three colon-separated parts are required. The fractional part is
/// parsed as an integer numerator over 1000 and integer-divided, so
/// sub-second precision truncates to whole seconds. Non-numeric components
/// parse as 0.
fn vtt_clock_seconds(clock: &str) -> Result<f64> {
    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() != 3 {
        return Err(anyhow!("invalid WebVTT clock value: {}", clock));
    }

    let hours: i64 = parts[0].parse().unwrap_or(0);
    let minutes: i64 = parts[1].parse().unwrap_or(0);

    let sec_parts: Vec<&str> = parts[2].split('.').collect();
    let seconds: i64 = sec_parts[0].parse().unwrap_or(0);
    let millis: i64 = sec_parts
        .get(1)
        .map_or(0, |fraction| fraction.parse().unwrap_or(0));

    Ok((hours * 3600 + minutes * 60 + seconds + millis / 1000) as f64)
}
