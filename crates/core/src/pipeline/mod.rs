pub mod lyrics_renderer;
pub mod play_lyrics_use_case;
pub mod session;
