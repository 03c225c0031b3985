pub mod constants;
pub mod language;
pub mod timecode;
