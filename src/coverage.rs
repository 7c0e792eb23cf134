/*!
 * Window-coverage calculation for caption tracks.
 *
 * Coverage is the summed per-segment overlap with a target window divided
 * by the window length. Each segment contributes independently: overlapping
 * segments are double-counted rather than union-merged, so the ratio can
 * exceed 1.0. Downstream thresholds depend on this additive definition.
 */

use log::debug;

use crate::caption_processor::CaptionSegment;

/// Result of measuring caption coverage over a playback window
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Window start in seconds
    pub window_start: f64,
    /// Window end in seconds
    pub window_end: f64,
    /// Summed per-segment overlap in seconds
    pub covered_seconds: f64,
    /// covered_seconds over window length; 0 for an empty window, may
    /// exceed 1.0 when segments overlap inside the window
    pub ratio: f64,
}

impl CoverageReport {
    /// Coverage as a percentage
    pub fn percent(&self) -> f64 {
        self.ratio * 100.0
    }
}

/// Measure how much of `[window_start, window_end)` is covered by segments.
///
/// A window with `window_end <= window_start` has coverage exactly 0 (never
/// a division by zero, never negative). Inverted or zero-length segments
/// contribute nothing. Segment order is irrelevant to the sum.
pub fn window_coverage(
    segments: &[CaptionSegment],
    window_start: f64,
    window_end: f64,
) -> CoverageReport {
    let total = window_end - window_start;
    if total <= 0.0 {
        return CoverageReport {
            window_start,
            window_end,
            covered_seconds: 0.0,
            ratio: 0.0,
        };
    }

    let mut covered = 0.0_f64;
    for segment in segments {
        let overlap_start = segment.start.max(window_start);
        let overlap_end = segment.end.min(window_end);
        if overlap_end > overlap_start {
            covered += overlap_end - overlap_start;
        }
    }

    debug!(
        "Coverage over [{}, {}): {:.3}s of {:.3}s across {} segments",
        window_start,
        window_end,
        covered,
        total,
        segments.len()
    );

    CoverageReport {
        window_start,
        window_end,
        covered_seconds: covered,
        ratio: covered / total,
    }
}
