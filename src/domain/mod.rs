mod audio_blob;
mod decoded_audio;
mod language_code;
mod staged_file_name;
mod synthesis;
mod transcription;
mod transcription_stage;

pub use audio_blob::{AudioBlob, AudioOrigin, ContainerHint};
pub use decoded_audio::{DecodedAudio, TARGET_SAMPLE_RATE};
pub use language_code::{DEFAULT_LANGUAGE, DEFAULT_SYNTHESIS_TAG, LanguageCode};
pub use staged_file_name::{StagedFileName, sanitize_filename};
pub use synthesis::{MPEG_MIME, SynthesizedSpeech};
pub use transcription::{ENGINE_NAME, PLACEHOLDER_CONFIDENCE, Transcript, TranscriptionResult};
pub use transcription_stage::TranscriptionStage;
