use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::playback::domain::player::AudioPlayer;
use crate::shared::language::Language;
use crate::transcript::domain::sync_cursor::SyncCursor;
use crate::transcript::domain::timeline::Timeline;
use crate::transcript::domain::word_groups::split_word_groups;

use super::lyrics_renderer::LyricsRenderer;

/// Drives playback-synchronized lyric display for one loaded transcript.
///
/// Owns the polling loop: each tick reads the player's time, advances the
/// cursor, and notifies the renderer of line changes. The loop's lifetime is
/// scoped to this call; it ends when playback finishes or `cancelled` is
/// set, so a torn-down session cannot keep advancing a stale cursor.
pub struct PlayLyricsUseCase {
    renderer: Box<dyn LyricsRenderer>,
    poll_interval: Duration,
}

impl PlayLyricsUseCase {
    pub fn new(renderer: Box<dyn LyricsRenderer>, poll_interval: Duration) -> Self {
        Self {
            renderer,
            poll_interval,
        }
    }

    pub fn run(
        &mut self,
        player: &mut dyn AudioPlayer,
        timeline: &Timeline,
        language: Language,
        title: &str,
        cancelled: &Arc<AtomicBool>,
    ) {
        self.renderer.session_started(title, player.duration());

        let mut cursor = SyncCursor::new();
        let mut displayed: Option<usize> = None;
        player.play();

        loop {
            if cancelled.load(Ordering::Relaxed) {
                player.pause();
                break;
            }
            if player.is_finished() {
                break;
            }

            let state = player.state();
            cursor.advance(timeline, state.current_time);

            // A gap between segments leaves the previous line on screen.
            if cursor.active_index() != displayed {
                if let Some(index) = cursor.active_index() {
                    if let Some(segment) = timeline.get(index) {
                        let current = split_word_groups(&segment.text, language);
                        let upcoming = timeline
                            .get(index + 1)
                            .map(|next| split_word_groups(&next.text, language));
                        self.renderer.line_changed(&current, upcoming.as_deref());
                    }
                    displayed = Some(index);
                }
            }

            self.renderer.progress(&state);
            thread::sleep(self.poll_interval);
        }

        self.renderer.finished();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Mutex;

    use crate::playback::domain::player::PlaybackState;
    use crate::transcript::domain::segment::TranscriptSegment;

    use super::*;

    // ─── Stubs ───

    /// Player whose clock follows a scripted sequence of time samples;
    /// reports finished once the script runs out.
    struct ScriptedPlayer {
        times: Vec<f64>,
        tick: Cell<usize>,
        playing: bool,
    }

    impl ScriptedPlayer {
        fn new(times: Vec<f64>) -> Self {
            Self {
                times,
                tick: Cell::new(0),
                playing: false,
            }
        }
    }

    impl AudioPlayer for ScriptedPlayer {
        fn play(&mut self) {
            self.playing = true;
        }
        fn pause(&mut self) {
            self.playing = false;
        }
        fn is_playing(&self) -> bool {
            self.playing
        }
        fn current_time(&self) -> f64 {
            let tick = self.tick.get();
            self.tick.set(tick + 1);
            self.times[tick.min(self.times.len() - 1)]
        }
        fn duration(&self) -> Option<f64> {
            Some(3.0)
        }
        fn is_finished(&self) -> bool {
            self.tick.get() >= self.times.len()
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        events: Mutex<Vec<String>>,
    }

    impl RecordingRenderer {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl LyricsRenderer for Arc<RecordingRenderer> {
        fn session_started(&mut self, title: &str, duration: Option<f64>) {
            self.events
                .lock()
                .unwrap()
                .push(format!("started:{title}:{duration:?}"));
        }
        fn line_changed(&mut self, current: &[String], upcoming: Option<&[String]>) {
            self.events.lock().unwrap().push(format!(
                "line:{}|next:{}",
                current.join("+"),
                upcoming.map(|u| u.join("+")).unwrap_or_default()
            ));
        }
        fn progress(&mut self, _state: &PlaybackState) {}
        fn finished(&mut self) {
            self.events.lock().unwrap().push("finished".to_string());
        }
    }

    fn segment(text: &str, begin: f64, end: f64) -> TranscriptSegment {
        TranscriptSegment {
            text: text.to_string(),
            time_begin: begin,
            time_end: end,
        }
    }

    fn run_with(
        times: Vec<f64>,
        timeline: &Timeline,
        cancelled: &Arc<AtomicBool>,
    ) -> Vec<String> {
        let renderer = Arc::new(RecordingRenderer::default());
        let mut use_case =
            PlayLyricsUseCase::new(Box::new(renderer.clone()), Duration::from_millis(0));
        let mut player = ScriptedPlayer::new(times);
        use_case.run(
            &mut player,
            timeline,
            Language::English,
            "song.mp3",
            cancelled,
        );
        renderer.events()
    }

    #[test]
    fn test_lines_emitted_in_playback_order() {
        let timeline = Timeline::new(vec![
            segment("FirstLine", 0.0, 1.0),
            segment("SecondLine", 1.0, 2.0),
        ]);
        let cancelled = Arc::new(AtomicBool::new(false));
        let events = run_with(vec![0.5, 0.99, 1.5], &timeline, &cancelled);

        assert_eq!(
            events,
            vec![
                "started:song.mp3:Some(3.0)",
                "line:First+Line|next:Second+Line",
                "line:Second+Line|next:",
                "finished",
            ]
        );
    }

    #[test]
    fn test_unchanged_line_is_not_re_emitted() {
        let timeline = Timeline::new(vec![segment("OnlyLine", 0.0, 2.0)]);
        let cancelled = Arc::new(AtomicBool::new(false));
        let events = run_with(vec![0.1, 0.5, 1.0, 1.5], &timeline, &cancelled);

        let line_events = events.iter().filter(|e| e.starts_with("line:")).count();
        assert_eq!(line_events, 1);
    }

    #[test]
    fn test_gap_keeps_previous_line_on_screen() {
        let timeline = Timeline::new(vec![segment("A", 0.0, 1.0), segment("B", 2.0, 3.0)]);
        let cancelled = Arc::new(AtomicBool::new(false));
        let events = run_with(vec![0.5, 1.5, 2.5], &timeline, &cancelled);

        let lines: Vec<_> = events.iter().filter(|e| e.starts_with("line:")).collect();
        assert_eq!(lines, vec!["line:A|next:B", "line:B|next:"]);
    }

    #[test]
    fn test_loop_survives_times_past_the_end() {
        let timeline = Timeline::new(vec![segment("A", 0.0, 1.0)]);
        let cancelled = Arc::new(AtomicBool::new(false));
        let events = run_with(vec![0.5, 5.0, 50.0], &timeline, &cancelled);
        assert_eq!(events.last().map(String::as_str), Some("finished"));
    }

    #[test]
    fn test_empty_timeline_still_plays_through() {
        let timeline = Timeline::default();
        let cancelled = Arc::new(AtomicBool::new(false));
        let events = run_with(vec![0.5, 1.0], &timeline, &cancelled);
        assert_eq!(events, vec!["started:song.mp3:Some(3.0)", "finished"]);
    }

    #[test]
    fn test_cancellation_stops_the_loop_and_pauses_playback() {
        let timeline = Timeline::new(vec![segment("A", 0.0, 1.0)]);
        let cancelled = Arc::new(AtomicBool::new(true));

        let renderer = Arc::new(RecordingRenderer::default());
        let mut use_case =
            PlayLyricsUseCase::new(Box::new(renderer.clone()), Duration::from_millis(0));
        let mut player = ScriptedPlayer::new(vec![0.5, 0.9]);
        use_case.run(
            &mut player,
            &timeline,
            Language::English,
            "song.mp3",
            &cancelled,
        );

        assert!(!player.is_playing());
        let events = renderer.events();
        assert!(events.iter().all(|e| !e.starts_with("line:")));
        assert_eq!(events.last().map(String::as_str), Some("finished"));
    }
}
