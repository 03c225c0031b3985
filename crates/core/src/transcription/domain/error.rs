use thiserror::Error;

/// Failure surfaced by a transcription request.
///
/// Callers treat this as one opaque failure; the variants exist to carry
/// the underlying cause. Requests are never retried.
#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("audio payload is empty")]
    EmptyAudio,
    #[error("transcription request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("transcription service returned {status}: {body}")]
    Service { status: u16, body: String },
    #[error("malformed transcription response: {0}")]
    MalformedResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_names_status_and_body() {
        let err = TranscriptionError::Service {
            status: 401,
            body: "invalid key".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("invalid key"));
    }

    #[test]
    fn test_transport_error_preserves_source() {
        use std::error::Error;

        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = TranscriptionError::Transport(Box::new(cause));
        assert!(err.source().is_some());
    }
}
