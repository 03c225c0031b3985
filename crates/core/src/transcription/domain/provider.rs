use crate::shared::language::Language;
use crate::transcript::domain::segment::TranscriptSegment;

use super::error::TranscriptionError;

/// One audio file ready for submission to the transcription service.
#[derive(Clone, Debug)]
pub struct TranscriptionRequest {
    audio: Vec<u8>,
    filename: String,
    language: Language,
}

impl TranscriptionRequest {
    /// Rejects an empty audio payload before anything goes on the wire.
    pub fn new(
        audio: Vec<u8>,
        filename: impl Into<String>,
        language: Language,
    ) -> Result<Self, TranscriptionError> {
        if audio.is_empty() {
            return Err(TranscriptionError::EmptyAudio);
        }
        Ok(Self {
            audio,
            filename: filename.into(),
            language,
        })
    }

    pub fn audio(&self) -> &[u8] {
        &self.audio
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

/// Domain interface for remote speech-to-text transcription.
///
/// Implementations submit one request and return the service's ordered
/// segment list.
pub trait TranscriptionProvider: Send {
    fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<Vec<TranscriptSegment>, TranscriptionError>;
}
