use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use thiserror::Error;

use crate::playback::domain::player::AudioPlayer;

#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("failed to open audio output device: {0}")]
    Device(#[from] rodio::StreamError),
    #[error("failed to create playback sink: {0}")]
    Sink(#[from] rodio::PlayError),
}

/// Audio playback through the default output device.
///
/// Decodes the whole file into one sink source; the current time comes from
/// the sink's playback position. Opens paused so the caller decides when
/// playback starts.
pub struct RodioPlayer {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
    duration: Option<f64>,
    playing: bool,
}

impl RodioPlayer {
    pub fn open(path: &Path) -> Result<Self, PlaybackError> {
        let file = File::open(path).map_err(|e| PlaybackError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;
        let duration = source.total_duration().map(|d| d.as_secs_f64());

        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        sink.append(source);
        sink.pause();

        log::debug!(
            "opened {} for playback (duration: {:?})",
            path.display(),
            duration
        );

        Ok(Self {
            _stream: stream,
            _handle: handle,
            sink,
            duration,
            playing: false,
        })
    }
}

impl std::fmt::Debug for RodioPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioPlayer")
            .field("duration", &self.duration)
            .field("playing", &self.playing)
            .finish_non_exhaustive()
    }
}

impl AudioPlayer for RodioPlayer {
    fn play(&mut self) {
        self.sink.play();
        self.playing = true;
    }

    fn pause(&mut self) {
        self.sink.pause();
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing && !self.sink.empty()
    }

    fn current_time(&self) -> f64 {
        self.sink.get_pos().as_secs_f64()
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}
