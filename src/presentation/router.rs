use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    handle_panic, health_handler, json_payload_too_large, method_not_allowed_handler,
    not_found_handler,
    stream_transcription_handler, supported_languages_handler, synthesize_handler,
    upload_transcription_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.max_payload_bytes;

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/stt/upload", post(upload_transcription_handler))
        .route("/api/stt/stream", post(stream_transcription_handler))
        .route(
            "/api/stt/supported-languages",
            get(supported_languages_handler),
        )
        .route("/api/tts/synthesize", post(synthesize_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(middleware::map_response_with_state(
            state.clone(),
            json_payload_too_large,
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .with_state(state)
}
