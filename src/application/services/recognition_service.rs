use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{AudioDecoder, Recognition, Recognizer};
use crate::domain::{
    AudioBlob, ENGINE_NAME, LanguageCode, PLACEHOLDER_CONFIDENCE, Transcript, TranscriptionResult,
    TranscriptionStage,
};

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("invalid audio container: {0}")]
    InvalidContainer(String),
    #[error("decoder crashed: {0}")]
    DecoderCrashed(String),
}

/// Decodes a blob and asks the remote recognizer for a transcript.
pub struct RecognitionService {
    decoder: Arc<dyn AudioDecoder>,
    recognizer: Arc<dyn Recognizer>,
    timeout: Duration,
}

impl RecognitionService {
    pub fn new(
        decoder: Arc<dyn AudioDecoder>,
        recognizer: Arc<dyn Recognizer>,
        timeout: Duration,
    ) -> Self {
        Self {
            decoder,
            recognizer,
            timeout,
        }
    }

    #[tracing::instrument(skip(self, blob), fields(bytes = blob.len(), origin = ?blob.origin()))]
    pub async fn recognize(
        &self,
        blob: &AudioBlob,
        language: &LanguageCode,
    ) -> Result<TranscriptionResult, RecognitionError> {
        let language = {
            let effective = language.for_recognition();
            if &effective != language {
                tracing::warn!(
                    requested = %language,
                    effective = %effective,
                    "Unsupported recognition language, falling back"
                );
            }
            effective
        };

        let decoder = Arc::clone(&self.decoder);
        let owned_blob = blob.clone();
        let decoded = tokio::task::spawn_blocking(move || decoder.decode(&owned_blob))
            .await
            .map_err(|e| RecognitionError::DecoderCrashed(e.to_string()))?
            .map_err(|e| RecognitionError::InvalidContainer(e.to_string()))?;

        tracing::debug!(
            stage = %TranscriptionStage::Recognizing,
            samples = decoded.samples().len(),
            duration_secs = decoded.duration_secs(),
            language = %language,
            "Sending audio to recognizer"
        );

        let outcome = tokio::time::timeout(
            self.timeout,
            self.recognizer.recognize(&decoded, &language),
        )
        .await;

        let result = match outcome {
            Err(_) => TranscriptionResult::ServiceFailure {
                message: format!("recognizer timed out after {}s", self.timeout.as_secs()),
            },
            Ok(Err(e)) => TranscriptionResult::ServiceFailure {
                message: e.to_string(),
            },
            Ok(Ok(Recognition::NoMatch)) => TranscriptionResult::Unintelligible,
            Ok(Ok(Recognition::Transcript(text))) if text.trim().is_empty() => {
                TranscriptionResult::Unintelligible
            }
            Ok(Ok(Recognition::Transcript(text))) => TranscriptionResult::Success(Transcript::new(
                text.trim(),
                ENGINE_NAME,
                PLACEHOLDER_CONFIDENCE,
            )),
        };

        Ok(result)
    }
}
