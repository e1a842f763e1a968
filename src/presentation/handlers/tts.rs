use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::error_response::error_response;
use crate::application::services::{SynthesisError, resolve_synthesis_language};
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[tracing::instrument(skip_all)]
pub async fn synthesize_handler(
    State(state): State<AppState>,
    payload: Result<Json<SynthesizeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Invalid synthesis request");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON payload: {}", rejection.body_text()),
            );
        }
    };

    let language = resolve_synthesis_language(request.language.as_deref());

    tracing::debug!(
        text = %preview_text(&request.text),
        language = %language,
        "Processing synthesis request"
    );

    match state
        .synthesis_service
        .synthesize(&request.text, &language)
        .await
    {
        Ok(speech) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, speech.mime_type),
                (header::CONTENT_DISPOSITION, "inline; filename=\"speech.mp3\""),
            ],
            speech.audio,
        )
            .into_response(),
        Err(e @ SynthesisError::EmptyText) => {
            tracing::warn!("Synthesis request with empty text");
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e @ SynthesisError::Failed(_)) => {
            tracing::error!(error = %e, "Synthesis failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
