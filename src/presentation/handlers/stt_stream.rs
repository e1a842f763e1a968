use axum::RequestExt;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Response;
use bytes::Bytes;

use super::error_response::transcription_error_response;
use super::speech_input::{LanguageQuery, header_language, read_speech_form, transcript_response};
use crate::application::services::{IngestError, LanguageHints, TranscriptionError};
use crate::presentation::state::AppState;

/// Audio and optional form language from either a multipart form or the raw body.
async fn read_stream_payload(request: Request) -> Result<(Bytes, Option<String>), IngestError> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false);

    if is_multipart {
        let multipart = request
            .extract::<Multipart, _>()
            .await
            .map_err(|e| IngestError::MalformedRequest(e.body_text()))?;
        let form = read_speech_form(multipart).await?;
        let data = form.audio.map(|a| a.data).unwrap_or_default();
        return Ok((data, form.language));
    }

    let body = request.extract::<Bytes, _>().await.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            IngestError::PayloadTooLarge
        } else {
            IngestError::MalformedRequest(e.body_text())
        }
    })?;

    Ok((body, None))
}

#[tracing::instrument(skip_all)]
pub async fn stream_transcription_handler(
    State(state): State<AppState>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
    headers: HeaderMap,
    request: Request,
) -> Response {
    let (payload, form_language) = match read_stream_payload(request).await {
        Ok(read) => read,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read audio stream");
            return transcription_error_response(
                TranscriptionError::Ingest(e),
                state.max_payload_mb(),
            );
        }
    };

    let hints = LanguageHints {
        form: form_language,
        query: query.ok().and_then(|Query(q)| q.language),
        header: header_language(&headers),
    };

    match state
        .transcription_service
        .transcribe_stream(payload, &hints)
        .await
    {
        Ok(transcript) => transcript_response(transcript),
        Err(e) => transcription_error_response(e, state.max_payload_mb()),
    }
}
