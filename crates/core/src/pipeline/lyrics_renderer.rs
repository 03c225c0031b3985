use crate::playback::domain::player::PlaybackState;

/// Display seam for karaoke output.
///
/// Decouples the sync loop from the output mechanism (terminal, GUI, test
/// recorder), so the loop never knows how lines are drawn.
pub trait LyricsRenderer: Send {
    /// A transcript is loaded and playback is about to start.
    fn session_started(&mut self, title: &str, duration: Option<f64>);

    /// The active line changed. `current` holds the active segment's word
    /// groups, `upcoming` the next segment's when there is one.
    fn line_changed(&mut self, current: &[String], upcoming: Option<&[String]>);

    /// Periodic tick with the latest playback state.
    fn progress(&mut self, state: &PlaybackState);

    /// The sync loop ended (playback finished or the session was torn down).
    fn finished(&mut self);
}

/// Renderer that discards all events. Used by tests.
pub struct NullRenderer;

impl LyricsRenderer for NullRenderer {
    fn session_started(&mut self, _title: &str, _duration: Option<f64>) {}
    fn line_changed(&mut self, _current: &[String], _upcoming: Option<&[String]>) {}
    fn progress(&mut self, _state: &PlaybackState) {}
    fn finished(&mut self) {}
}
