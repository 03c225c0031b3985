pub const TRANSCRIPTION_ENDPOINT: &str = "https://api.gladia.io/audio/text/audio-transcription/";

pub const API_KEY_ENV: &str = "GLADIA_API_KEY";

/// Sync polling cadence. The service reports centisecond timestamps, so a
/// finer default buys nothing.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Floor for user-configured polling intervals.
pub const MIN_POLL_INTERVAL_MS: u64 = 10;

pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a", "aac", "flac", "ogg"];
