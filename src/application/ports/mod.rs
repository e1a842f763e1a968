mod audio_decoder;
mod recognizer;
mod synthesizer;
mod upload_store;

pub use audio_decoder::{AudioDecoder, AudioDecoderError};
pub use recognizer::{Recognition, Recognizer, RecognizerError};
pub use synthesizer::{Synthesizer, SynthesizerError};
pub use upload_store::{StagedUpload, UploadStore, UploadStoreError};
