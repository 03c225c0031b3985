use crate::shared::timecode::to_centis;

/// A transcribed span of text with start and end timestamps in seconds.
///
/// Segments arrive from the transcription service ordered by `time_begin`
/// ascending and are immutable once received.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    pub time_begin: f64,
    pub time_end: f64,
}

impl TranscriptSegment {
    pub fn duration(&self) -> f64 {
        self.time_end - self.time_begin
    }

    /// Whether the playhead is inside this segment's span.
    ///
    /// The active interval is inclusive of the start and exclusive of the
    /// end, compared at centisecond granularity.
    pub fn contains(&self, time: f64) -> bool {
        let t = to_centis(time);
        to_centis(self.time_begin) <= t && t < to_centis(self.time_end)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn segment(begin: f64, end: f64) -> TranscriptSegment {
        TranscriptSegment {
            text: "la la la".to_string(),
            time_begin: begin,
            time_end: end,
        }
    }

    #[test]
    fn test_duration() {
        assert_relative_eq!(segment(1.2, 3.5).duration(), 2.3, epsilon = 0.001);
    }

    #[test]
    fn test_contains_interior_point() {
        assert!(segment(0.0, 1.0).contains(0.5));
    }

    #[test]
    fn test_contains_start_is_inclusive() {
        assert!(segment(1.0, 2.0).contains(1.0));
    }

    #[test]
    fn test_contains_end_is_exclusive() {
        assert!(!segment(1.0, 2.0).contains(2.0));
    }

    #[test]
    fn test_contains_before_and_after() {
        let s = segment(1.0, 2.0);
        assert!(!s.contains(0.99));
        assert!(!s.contains(2.01));
    }

    #[test]
    fn test_contains_absorbs_playback_clock_drift() {
        // A playhead reporting 0.9999999 for a segment starting at 1.0
        // still matches after centisecond rounding.
        assert!(segment(1.0, 2.0).contains(0.999_999_9));
    }
}
