use async_trait::async_trait;

use crate::domain::{DecodedAudio, LanguageCode};

#[async_trait]
pub trait Recognizer: Send + Sync {
    async fn recognize(
        &self,
        audio: &DecodedAudio,
        language: &LanguageCode,
    ) -> Result<Recognition, RecognizerError>;
}

/// What the remote engine made of the audio when the call itself succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum Recognition {
    Transcript(String),
    NoMatch,
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("api request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
