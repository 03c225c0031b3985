use std::io::Write;

use karaoke_core::pipeline::lyrics_renderer::LyricsRenderer;
use karaoke_core::playback::domain::player::PlaybackState;

const HIGHLIGHT: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Karaoke display on stdout: the active line bold, the upcoming line dim,
/// a playback clock redrawn in place on stderr.
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn join_groups(groups: &[String]) -> String {
    groups
        .iter()
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl LyricsRenderer for TerminalRenderer {
    fn session_started(&mut self, title: &str, duration: Option<f64>) {
        println!("{title} Karaoke");
        if let Some(duration) = duration {
            log::info!("playback duration: {duration:.2}s");
        }
        println!();
    }

    fn line_changed(&mut self, current: &[String], upcoming: Option<&[String]>) {
        // Clear the clock line before printing lyrics over it.
        eprint!("\r\x1b[2K");
        println!("{HIGHLIGHT}{}{RESET}", join_groups(current));
        if let Some(upcoming) = upcoming {
            println!("{DIM}{}{RESET}", join_groups(upcoming));
        }
    }

    fn progress(&mut self, state: &PlaybackState) {
        match state.duration {
            Some(duration) => eprint!("\r  {:6.2}s / {duration:.2}s", state.current_time),
            None => eprint!("\r  {:6.2}s", state.current_time),
        }
        let _ = std::io::stderr().flush();
    }

    fn finished(&mut self) {
        eprintln!();
        println!("Done.");
    }
}
