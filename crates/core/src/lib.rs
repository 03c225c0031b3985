//! Karaoke-style transcript synchronization for local audio files.
//!
//! The crate is split the same way the data flows: `transcription` submits
//! an audio file to a remote speech-to-text service and returns timestamped
//! segments, `transcript` finds the segment under the playhead, `playback`
//! abstracts the audio source, and `pipeline` ties them together into a
//! polling sync loop behind a renderer seam.

pub mod pipeline;
pub mod playback;
pub mod shared;
pub mod transcript;
pub mod transcription;
