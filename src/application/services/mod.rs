mod audio_ingest;
mod language_resolver;
mod recognition_service;
mod synthesis_service;
mod transcription_service;

pub use audio_ingest::{AudioIngest, IngestError, StagedAudio, UploadedAudio};
pub use language_resolver::{
    LanguageHints, resolve_synthesis_language, resolve_transcription_language,
};
pub use recognition_service::{RecognitionError, RecognitionService};
pub use synthesis_service::{SynthesisError, SynthesisService};
pub use transcription_service::{TranscriptionError, TranscriptionService};
