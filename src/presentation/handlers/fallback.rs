use std::any::Any;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::Response;

use super::error_response::{error_response, payload_too_large_message};
use crate::presentation::state::AppState;

pub async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}

pub async fn method_not_allowed_handler() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = detail, "Handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// Body-limit layers answer 413 in plain text; give those the JSON error shape.
pub async fn json_payload_too_large(State(state): State<AppState>, response: Response) -> Response {
    if response.status() != StatusCode::PAYLOAD_TOO_LARGE {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"));

    if is_json {
        response
    } else {
        error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            payload_too_large_message(state.max_payload_mb()),
        )
    }
}
