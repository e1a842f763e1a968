use crate::domain::{AudioBlob, DecodedAudio};

/// Turns a container (or headerless PCM stream) into 16 kHz mono samples.
///
/// Decoding is CPU-bound and synchronous; callers run it off the async executor.
pub trait AudioDecoder: Send + Sync {
    fn decode(&self, blob: &AudioBlob) -> Result<DecodedAudio, AudioDecoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioDecoderError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
}
