use std::thread;

use crossbeam_channel::Receiver;

use karaoke_core::transcript::domain::segment::TranscriptSegment;
use karaoke_core::transcription::domain::provider::{TranscriptionProvider, TranscriptionRequest};

/// Messages sent from the transcription worker to the main thread.
pub enum WorkerMessage {
    Complete(Vec<TranscriptSegment>),
    Error(String),
}

/// Spawn a background transcription worker.
///
/// The request blocks the worker thread until the service responds; exactly
/// one message arrives on the returned channel.
pub fn spawn(
    provider: Box<dyn TranscriptionProvider>,
    request: TranscriptionRequest,
) -> Receiver<WorkerMessage> {
    let (tx, rx) = crossbeam_channel::bounded(1);

    thread::spawn(move || {
        let message = match provider.transcribe(&request) {
            Ok(segments) => WorkerMessage::Complete(segments),
            Err(e) => WorkerMessage::Error(e.to_string()),
        };
        let _ = tx.send(message);
    });

    rx
}
