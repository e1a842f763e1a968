use std::panic::AssertUnwindSafe;

use bytes::Bytes;
use futures::FutureExt;

use super::audio_ingest::{AudioIngest, IngestError, UploadedAudio};
use super::language_resolver::{LanguageHints, resolve_transcription_language};
use super::recognition_service::{RecognitionError, RecognitionService};
use crate::domain::{AudioBlob, LanguageCode, Transcript, TranscriptionResult, TranscriptionStage};

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error("Invalid audio container: {0}")]
    InvalidContainer(String),
    #[error("Could not understand audio")]
    Unintelligible,
    #[error("API error: {0}")]
    Upstream(String),
    #[error("Server error: {0}")]
    Internal(String),
}

impl TranscriptionError {
    fn terminal_stage(&self) -> TranscriptionStage {
        match self {
            TranscriptionError::Upstream(_) | TranscriptionError::Internal(_) => {
                TranscriptionStage::Failed
            }
            TranscriptionError::Ingest(IngestError::Storage(_)) => TranscriptionStage::Failed,
            _ => TranscriptionStage::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryPoint {
    Upload,
    Stream,
}

/// Drives one transcription request from validation to a response-ready outcome.
pub struct TranscriptionService {
    ingest: AudioIngest,
    recognition: RecognitionService,
}

impl TranscriptionService {
    pub fn new(ingest: AudioIngest, recognition: RecognitionService) -> Self {
        Self {
            ingest,
            recognition,
        }
    }

    /// Stages the upload, recognizes it and releases the staged file on every path,
    /// including when the returned future is dropped before completion.
    #[tracing::instrument(skip(self, upload, hints))]
    pub async fn transcribe_upload(
        &self,
        upload: Option<UploadedAudio>,
        hints: &LanguageHints,
    ) -> Result<Transcript, TranscriptionError> {
        log_stage(TranscriptionStage::Received);

        let result = async {
            let staged = self.ingest.stage_upload(upload).await?;
            log_stage(TranscriptionStage::Validated);

            let language = resolve_transcription_language(hints);
            let blob = staged
                .load()
                .await
                .map_err(|e| TranscriptionError::Internal(e.to_string()))?;

            let outcome = self.run_recognition(&blob, &language, EntryPoint::Upload).await;
            drop(staged);
            outcome
        }
        .await;

        finish(result)
    }

    #[tracing::instrument(skip(self, payload, hints), fields(bytes = payload.len()))]
    pub async fn transcribe_stream(
        &self,
        payload: Bytes,
        hints: &LanguageHints,
    ) -> Result<Transcript, TranscriptionError> {
        log_stage(TranscriptionStage::Received);

        let result = async {
            let blob = self.ingest.from_stream(payload)?;
            log_stage(TranscriptionStage::Validated);

            let language = resolve_transcription_language(hints);
            self.run_recognition(&blob, &language, EntryPoint::Stream)
                .await
        }
        .await;

        finish(result)
    }

    async fn run_recognition(
        &self,
        blob: &AudioBlob,
        language: &LanguageCode,
        entry: EntryPoint,
    ) -> Result<Transcript, TranscriptionError> {
        log_stage(TranscriptionStage::Decoding);

        let outcome = AssertUnwindSafe(self.recognition.recognize(blob, language))
            .catch_unwind()
            .await
            .map_err(|_| TranscriptionError::Internal("recognition pipeline panicked".to_string()))?;

        let result = match outcome {
            Ok(result) => result,
            Err(RecognitionError::InvalidContainer(message)) => {
                return Err(TranscriptionError::InvalidContainer(message));
            }
            Err(RecognitionError::DecoderCrashed(message)) => {
                return Err(match entry {
                    EntryPoint::Stream => TranscriptionError::InvalidContainer(message),
                    EntryPoint::Upload => TranscriptionError::Internal(message),
                });
            }
        };

        match result {
            TranscriptionResult::Success(transcript) => Ok(transcript),
            TranscriptionResult::Unintelligible => Err(TranscriptionError::Unintelligible),
            TranscriptionResult::ServiceFailure { message } => {
                Err(TranscriptionError::Upstream(message))
            }
        }
    }
}

fn log_stage(stage: TranscriptionStage) {
    tracing::debug!(stage = %stage, "Transcription stage");
}

fn finish(result: Result<Transcript, TranscriptionError>) -> Result<Transcript, TranscriptionError> {
    match &result {
        Ok(transcript) => {
            tracing::info!(
                stage = %TranscriptionStage::Succeeded,
                chars = transcript.text.len(),
                "Transcription completed"
            );
        }
        Err(e) => {
            let stage = e.terminal_stage();
            if stage == TranscriptionStage::Failed {
                tracing::error!(stage = %stage, error = %e, "Transcription failed");
            } else {
                tracing::warn!(stage = %stage, error = %e, "Transcription rejected");
            }
        }
    }
    log_stage(TranscriptionStage::Responded);
    result
}
