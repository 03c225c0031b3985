use crate::shared::timecode::to_centis;

use super::segment::TranscriptSegment;

/// The ordered transcript of one audio file.
///
/// Segments are kept in the order the transcription service returned them
/// (ascending `time_begin`); they are not re-sorted.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    segments: Vec<TranscriptSegment>,
}

impl Timeline {
    pub fn new(segments: Vec<TranscriptSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[TranscriptSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TranscriptSegment> {
        self.segments.get(index)
    }

    /// Index of the segment whose span contains `time`, by binary search
    /// over segment start times.
    pub fn segment_at(&self, time: f64) -> Option<usize> {
        let t = to_centis(time);
        let upcoming = self.upcoming_index(time);
        if upcoming == 0 {
            return None;
        }
        let candidate = upcoming - 1;
        (t < to_centis(self.segments[candidate].time_end)).then_some(candidate)
    }

    /// Index of the first segment that begins strictly after `time`.
    ///
    /// Equals `len()` when every segment has already begun.
    pub fn upcoming_index(&self, time: f64) -> usize {
        let t = to_centis(time);
        self.segments
            .partition_point(|s| to_centis(s.time_begin) <= t)
    }
}
