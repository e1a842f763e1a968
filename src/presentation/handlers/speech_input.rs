use std::error::Error;

use axum::Json;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;
use serde::{Deserialize, Serialize};

use crate::application::services::{IngestError, UploadedAudio};
use crate::domain::Transcript;

pub const STT_LANGUAGE_HEADER: &str = "x-stt-language";
pub const AUDIO_FIELD: &str = "audio";
pub const LANGUAGE_FIELD: &str = "language";

#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub transcript: String,
    pub engine: String,
    pub confidence: f32,
}

impl From<Transcript> for TranscriptResponse {
    fn from(t: Transcript) -> Self {
        Self {
            transcript: t.text,
            engine: t.engine,
            confidence: t.confidence,
        }
    }
}

pub fn transcript_response(transcript: Transcript) -> Response {
    (StatusCode::OK, Json(TranscriptResponse::from(transcript))).into_response()
}

/// Fields of interest in a transcription form.
#[derive(Debug, Default)]
pub struct SpeechForm {
    pub audio: Option<UploadedAudio>,
    pub language: Option<String>,
}

pub async fn read_speech_form(mut multipart: Multipart) -> Result<SpeechForm, IngestError> {
    let mut form = SpeechForm::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            AUDIO_FIELD => {
                let filename = field.file_name().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                tracing::debug!(
                    filename = ?filename,
                    bytes = data.len(),
                    "Audio field received"
                );
                form.audio = Some(UploadedAudio { filename, data });
            }
            LANGUAGE_FIELD => {
                form.language = Some(field.text().await.map_err(multipart_error)?);
            }
            other => tracing::debug!(field = other, "Ignoring unexpected form field"),
        }
    }

    Ok(form)
}

pub fn multipart_error(e: MultipartError) -> IngestError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE || exceeded_body_limit(&e) {
        IngestError::PayloadTooLarge
    } else {
        IngestError::MalformedRequest(e.body_text())
    }
}

/// Chunked bodies that overrun the cap surface as a multer read failure
/// wrapping the limit error a few levels down.
fn exceeded_body_limit(e: &MultipartError) -> bool {
    let mut source: Option<&(dyn Error + 'static)> = e.source();
    while let Some(err) = source {
        if err.is::<LengthLimitError>() {
            return true;
        }
        source = err.source();
    }
    false
}

pub fn header_language(headers: &HeaderMap) -> Option<String> {
    headers
        .get(STT_LANGUAGE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
