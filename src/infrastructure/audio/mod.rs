mod google_speech_recognizer;
mod google_translate_synthesizer;
mod symphonia_audio_decoder;

pub use google_speech_recognizer::{
    DEFAULT_SPEECH_ENDPOINT, GoogleSpeechRecognizer, parse_recognition_body,
};
pub use google_translate_synthesizer::{
    DEFAULT_TTS_ENDPOINT, GoogleTranslateSynthesizer, split_segments,
};
pub use symphonia_audio_decoder::SymphoniaAudioDecoder;
