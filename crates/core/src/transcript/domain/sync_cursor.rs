use crate::shared::timecode::to_centis;

use super::segment::TranscriptSegment;
use super::timeline::Timeline;

/// Pointer into a [`Timeline`] tracking the currently active segment.
///
/// Playback time normally only moves forward, so `advance` scans on from its
/// previous position. When the reported time jumps backward (the user
/// scrubbed), the cursor relocates by binary search instead of sticking at
/// the old position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SyncCursor {
    /// Next candidate index; non-decreasing while time is monotone.
    position: usize,
    active: Option<usize>,
    last_time: f64,
}

impl SyncCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_segment<'a>(&self, timeline: &'a Timeline) -> Option<&'a TranscriptSegment> {
        self.active.and_then(|i| timeline.get(i))
    }

    /// Re-evaluate the cursor for the playhead at `time` seconds.
    ///
    /// Safe to call at any cadence and past the end of the timeline; once
    /// every segment has finished this is a no-op apart from recording the
    /// time.
    pub fn advance(&mut self, timeline: &Timeline, time: f64) {
        if to_centis(time) < to_centis(self.last_time) {
            self.relocate(timeline, time);
        } else {
            self.scan_forward(timeline, time);
        }
        self.last_time = time;
    }

    fn scan_forward(&mut self, timeline: &Timeline, time: f64) {
        let t = to_centis(time);
        while let Some(segment) = timeline.get(self.position) {
            if to_centis(segment.time_end) <= t {
                self.position += 1;
            } else {
                break;
            }
        }
        self.active = match timeline.get(self.position) {
            Some(segment) if segment.contains(time) => Some(self.position),
            _ => None,
        };
    }

    fn relocate(&mut self, timeline: &Timeline, time: f64) {
        match timeline.segment_at(time) {
            Some(index) => {
                self.position = index;
                self.active = Some(index);
            }
            None => {
                self.position = timeline.upcoming_index(time);
                self.active = None;
            }
        }
    }
}
