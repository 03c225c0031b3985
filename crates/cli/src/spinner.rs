use std::io::Write;

const FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Terminal busy indicator shown while the transcription request is in
/// flight. Ticked by the caller; draws over its own line.
pub struct Spinner {
    message: String,
    frame: usize,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            frame: 0,
        }
    }

    pub fn tick(&mut self) {
        eprint!("\r{} {}", FRAMES[self.frame % FRAMES.len()], self.message);
        let _ = std::io::stderr().flush();
        self.frame += 1;
    }

    /// Erase the spinner line.
    pub fn clear(&self) {
        eprint!("\r{}\r", " ".repeat(self.message.len() + 2));
        let _ = std::io::stderr().flush();
    }
}
