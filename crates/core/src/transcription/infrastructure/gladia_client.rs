use reqwest::blocking::multipart;
use serde::Deserialize;

use crate::shared::constants::{API_KEY_ENV, TRANSCRIPTION_ENDPOINT};
use crate::transcript::domain::segment::TranscriptSegment;
use crate::transcription::domain::error::TranscriptionError;
use crate::transcription::domain::provider::{TranscriptionProvider, TranscriptionRequest};

/// Credential and endpoint for the transcription service.
///
/// Passed to the client as an explicit dependency so tests can substitute
/// both; `from_env` exists as a convenience for the CLI.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: TRANSCRIPTION_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Read the credential from `GLADIA_API_KEY`, if set and non-blank.
    pub fn from_env() -> Option<Self> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(Self::new)
    }
}

/// Speech recognizer backed by the Gladia audio-transcription endpoint.
///
/// Submits one multipart request per audio file in manual-language mode
/// with noise reduction enabled. No retries and no request timeout.
pub struct GladiaClient {
    config: ApiConfig,
    client: reqwest::blocking::Client,
}

impl GladiaClient {
    pub fn new(config: ApiConfig) -> Result<Self, TranscriptionError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| TranscriptionError::Transport(Box::new(e)))?;
        Ok(Self { config, client })
    }
}

impl TranscriptionProvider for GladiaClient {
    fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<Vec<TranscriptSegment>, TranscriptionError> {
        let part = multipart::Part::bytes(request.audio().to_vec())
            .file_name(request.filename().to_string());
        let form = multipart::Form::new()
            .part("audio", part)
            .text("language_behaviour", "manual")
            .text("language", request.language().as_str())
            .text("noise_reduction", "true");

        log::debug!(
            "submitting {} bytes of {} for {} transcription",
            request.audio().len(),
            request.filename(),
            request.language()
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("accept", "application/json")
            .header("x-gladia-key", &self.config.api_key)
            .multipart(form)
            .send()
            .map_err(|e| TranscriptionError::Transport(Box::new(e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(TranscriptionError::Service { status, body });
        }

        let body = response
            .text()
            .map_err(|e| TranscriptionError::Transport(Box::new(e)))?;
        let segments = parse_prediction(&body)?;
        log::info!("received {} transcript segments", segments.len());
        Ok(segments)
    }
}

#[derive(Debug, Deserialize)]
struct SegmentDto {
    transcription: String,
    time_begin: f64,
    time_end: f64,
}

impl From<SegmentDto> for TranscriptSegment {
    fn from(dto: SegmentDto) -> Self {
        Self {
            text: dto.transcription,
            time_begin: dto.time_begin,
            time_end: dto.time_end,
        }
    }
}

/// Extract the ordered segment list from a response body.
///
/// Segment order is preserved exactly as the service returned it.
fn parse_prediction(body: &str) -> Result<Vec<TranscriptSegment>, TranscriptionError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| TranscriptionError::MalformedResponse(e.to_string()))?;
    let prediction = value
        .get("prediction")
        .ok_or_else(|| TranscriptionError::MalformedResponse("missing prediction field".into()))?;
    let dtos: Vec<SegmentDto> = serde_json::from_value(prediction.clone())
        .map_err(|e| TranscriptionError::MalformedResponse(e.to_string()))?;
    Ok(dtos.into_iter().map(TranscriptSegment::from).collect())
}
