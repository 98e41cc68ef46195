use async_trait::async_trait;

use crate::domain::casting::VoiceId;

/// Repository for speech synthesis.
/// Abstracts the underlying TTS provider; one call synthesizes exactly one
/// script line with one catalog voice.
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Synthesize one line of text with the given voice.
    ///
    /// Returns encoded MP3 audio bytes ready for assembly.
    ///
    /// # Errors
    /// Returns error on HTTP failure, timeout, a response missing the audio
    /// field, or a malformed audio payload. Callers treat every error as a
    /// per-line failure, never as fatal to the whole run.
    async fn synthesize(&self, text: &str, voice: &VoiceId) -> Result<Vec<u8>, String>;
}
