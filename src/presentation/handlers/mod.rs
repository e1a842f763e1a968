mod error_response;
mod fallback;
mod health;
mod languages;
mod speech_input;
mod stt_stream;
mod stt_upload;
mod tts;

pub use error_response::{ErrorResponse, error_response, transcription_status};
pub use fallback::{
    handle_panic, json_payload_too_large, method_not_allowed_handler, not_found_handler,
};
pub use health::{SERVICE_NAME, health_handler};
pub use languages::supported_languages_handler;
pub use speech_input::{STT_LANGUAGE_HEADER, TranscriptResponse};
pub use stt_stream::stream_transcription_handler;
pub use stt_upload::upload_transcription_handler;
pub use tts::synthesize_handler;
