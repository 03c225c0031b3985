use crate::transcript::domain::segment::TranscriptSegment;

/// Lifecycle of one loaded audio file.
///
/// Exactly one variant holds at a time, so "loading" and "ready" cannot
/// coexist the way independent flags would allow.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Requesting,
    Ready(Vec<TranscriptSegment>),
    Failed(String),
}

/// State machine driving one transcription-and-playback session.
///
/// Transitions: `Idle -> Requesting -> Ready | Failed`; `Failed ->
/// Requesting` permits a retry with a new file; `reset` returns to `Idle`
/// from anywhere (selecting a new file tears the session down).
#[derive(Clone, Debug, Default)]
pub struct KaraokeSession {
    state: SessionState,
}

impl KaraokeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self.state, SessionState::Requesting)
    }

    pub fn segments(&self) -> Option<&[TranscriptSegment]> {
        match &self.state {
            SessionState::Ready(segments) => Some(segments),
            _ => None,
        }
    }

    /// Begin a transcription request. Returns whether the transition applied.
    pub fn begin_request(&mut self) -> bool {
        match self.state {
            SessionState::Idle | SessionState::Failed(_) => {
                self.state = SessionState::Requesting;
                true
            }
            _ => {
                log::warn!("ignoring begin_request in state {:?}", self.state);
                false
            }
        }
    }

    /// Record a completed request. Only valid while requesting.
    pub fn complete(&mut self, segments: Vec<TranscriptSegment>) -> bool {
        match self.state {
            SessionState::Requesting => {
                self.state = SessionState::Ready(segments);
                true
            }
            _ => {
                log::warn!("ignoring complete in state {:?}", self.state);
                false
            }
        }
    }

    /// Record a failed request. Only valid while requesting.
    pub fn fail(&mut self, error: String) -> bool {
        match self.state {
            SessionState::Requesting => {
                self.state = SessionState::Failed(error);
                true
            }
            _ => {
                log::warn!("ignoring fail in state {:?}", self.state);
                false
            }
        }
    }

    /// Tear the session back down, e.g. when a new file is selected.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }
}
