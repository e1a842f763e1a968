use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Returns MP3 audio for `text` spoken in the engine language `language_tag`.
    async fn synthesize(&self, text: &str, language_tag: &str) -> Result<Bytes, SynthesizerError>;

    fn supports_language(&self, language_tag: &str) -> bool;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesizerError {
    #[error("api request failed: {0}")]
    RequestFailed(String),
    #[error("empty audio returned")]
    EmptyAudio,
}
