use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Query, State};
use axum::http::HeaderMap;
use axum::response::Response;

use super::error_response::transcription_error_response;
use super::speech_input::{
    LanguageQuery, SpeechForm, header_language, read_speech_form, transcript_response,
};
use crate::application::services::{LanguageHints, TranscriptionError};
use crate::presentation::state::AppState;

#[tracing::instrument(skip_all)]
pub async fn upload_transcription_handler(
    State(state): State<AppState>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let form = match multipart {
        Ok(multipart) => read_speech_form(multipart).await,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Upload request is not multipart");
            Ok(SpeechForm::default())
        }
    };

    let form = match form {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read upload form");
            return transcription_error_response(
                TranscriptionError::Ingest(e),
                state.max_payload_mb(),
            );
        }
    };

    let hints = LanguageHints {
        form: form.language,
        query: query.ok().and_then(|Query(q)| q.language),
        header: header_language(&headers),
    };

    match state
        .transcription_service
        .transcribe_upload(form.audio, &hints)
        .await
    {
        Ok(transcript) => transcript_response(transcript),
        Err(e) => transcription_error_response(e, state.max_payload_mb()),
    }
}
