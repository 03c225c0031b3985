/// Snapshot of a playback source's externally visible state.
///
/// `duration` is `None` until the container reports a total length.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub current_time: f64,
    pub duration: Option<f64>,
    pub is_playing: bool,
}

/// Domain interface for an audio playback source.
///
/// The synchronizer only reads time from it; play/pause control belongs to
/// the hosting surface. Not `Send`: audio output handles stay on the thread
/// that opened them.
pub trait AudioPlayer {
    fn play(&mut self);
    fn pause(&mut self);
    fn is_playing(&self) -> bool;

    /// Seconds of audio played so far.
    fn current_time(&self) -> f64;

    /// Total length in seconds, when known.
    fn duration(&self) -> Option<f64>;

    /// Whether the source has played to the end.
    fn is_finished(&self) -> bool;

    fn state(&self) -> PlaybackState {
        PlaybackState {
            current_time: self.current_time(),
            duration: self.duration(),
            is_playing: self.is_playing(),
        }
    }
}
