use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{IngestError, TranscriptionError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn payload_too_large_message(max_mb: usize) -> String {
    format!("File too large. Max {}MB allowed", max_mb)
}

pub fn transcription_status(error: &TranscriptionError) -> StatusCode {
    match error {
        TranscriptionError::Ingest(IngestError::PayloadTooLarge) => StatusCode::PAYLOAD_TOO_LARGE,
        TranscriptionError::Ingest(IngestError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        TranscriptionError::Ingest(_) => StatusCode::BAD_REQUEST,
        TranscriptionError::InvalidContainer(_) => StatusCode::BAD_REQUEST,
        TranscriptionError::Unintelligible => StatusCode::UNPROCESSABLE_ENTITY,
        TranscriptionError::Upstream(_) => StatusCode::BAD_GATEWAY,
        TranscriptionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn transcription_error_response(error: TranscriptionError, max_mb: usize) -> Response {
    let status = transcription_status(&error);
    let message = match &error {
        TranscriptionError::Ingest(IngestError::PayloadTooLarge) => payload_too_large_message(max_mb),
        other => other.to_string(),
    };
    error_response(status, message)
}
