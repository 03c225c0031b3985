use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossbeam_channel::RecvTimeoutError;

use karaoke_core::pipeline::play_lyrics_use_case::PlayLyricsUseCase;
use karaoke_core::pipeline::session::{KaraokeSession, SessionState};
use karaoke_core::playback::infrastructure::rodio_player::RodioPlayer;
use karaoke_core::shared::constants::{
    API_KEY_ENV, AUDIO_EXTENSIONS, DEFAULT_POLL_INTERVAL_MS, MIN_POLL_INTERVAL_MS,
};
use karaoke_core::shared::language::Language;
use karaoke_core::transcript::domain::segment::TranscriptSegment;
use karaoke_core::transcript::domain::timeline::Timeline;
use karaoke_core::transcription::domain::provider::TranscriptionRequest;
use karaoke_core::transcription::infrastructure::gladia_client::{ApiConfig, GladiaClient};

mod renderer;
mod spinner;
mod worker;

use renderer::TerminalRenderer;
use spinner::Spinner;
use worker::WorkerMessage;

/// Karaoke player: transcribes a local audio file and displays the lyrics
/// in sync with playback.
#[derive(Parser)]
#[command(name = "karaoke")]
struct Cli {
    /// Input audio file.
    input: PathBuf,

    /// Transcription language: english, spanish, chinese, korean, japanese.
    #[arg(long, default_value = "english")]
    language: String,

    /// Transcription service API key (falls back to GLADIA_API_KEY).
    #[arg(long)]
    api_key: Option<String>,

    /// Sync polling interval in milliseconds.
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    poll_interval_ms: u64,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let language: Language = cli.language.parse()?;
    let config = match cli.api_key {
        Some(key) => ApiConfig::new(key),
        None => ApiConfig::from_env().ok_or_else(|| {
            format!("API key required: pass --api-key or set {API_KEY_ENV}")
        })?,
    };

    let audio = std::fs::read(&cli.input)?;
    let title = cli
        .input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| cli.input.display().to_string());
    let request = TranscriptionRequest::new(audio, title.clone(), language)?;

    let segments = request_transcription(request, config)?;
    if segments.is_empty() {
        log::warn!("service returned an empty transcript; playing without lyrics");
    }
    let timeline = Timeline::new(segments);

    let mut player = RodioPlayer::open(&cli.input)?;
    let cancelled = Arc::new(AtomicBool::new(false));
    let mut use_case = PlayLyricsUseCase::new(
        Box::new(TerminalRenderer::new()),
        Duration::from_millis(cli.poll_interval_ms),
    );
    use_case.run(&mut player, &timeline, language, &title, &cancelled);

    Ok(())
}

/// Submit the transcription request on a worker thread, animating a spinner
/// until the session leaves the requesting state.
fn request_transcription(
    request: TranscriptionRequest,
    config: ApiConfig,
) -> Result<Vec<TranscriptSegment>, Box<dyn std::error::Error>> {
    let provider = GladiaClient::new(config)?;

    let mut session = KaraokeSession::new();
    session.begin_request();

    let rx = worker::spawn(Box::new(provider), request);
    let mut spinner = Spinner::new("Transcribing audio...");

    while session.is_requesting() {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(WorkerMessage::Complete(segments)) => {
                session.complete(segments);
            }
            Ok(WorkerMessage::Error(e)) => {
                session.fail(e);
            }
            Err(RecvTimeoutError::Timeout) => spinner.tick(),
            Err(RecvTimeoutError::Disconnected) => {
                session.fail("transcription worker exited unexpectedly".to_string());
            }
        }
    }
    spinner.clear();

    match session.state() {
        SessionState::Ready(segments) => Ok(segments.clone()),
        SessionState::Failed(e) => {
            log::error!("transcription failed: {e}");
            Err(e.clone().into())
        }
        _ => Err("transcription did not complete".into()),
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !is_audio(&cli.input) {
        return Err(format!(
            "Unsupported audio format: {} (expected one of: {})",
            cli.input.display(),
            AUDIO_EXTENSIONS.join(", ")
        )
        .into());
    }
    if cli.poll_interval_ms < MIN_POLL_INTERVAL_MS {
        return Err(format!(
            "Poll interval must be at least {MIN_POLL_INTERVAL_MS} ms, got {}",
            cli.poll_interval_ms
        )
        .into());
    }
    if cli.poll_interval_ms > DEFAULT_POLL_INTERVAL_MS {
        log::warn!(
            "poll interval {} ms is coarser than the {} ms the transcript granularity expects",
            cli.poll_interval_ms,
            DEFAULT_POLL_INTERVAL_MS
        );
    }
    Ok(())
}

fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
