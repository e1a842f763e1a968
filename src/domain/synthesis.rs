use bytes::Bytes;

pub const MPEG_MIME: &str = "audio/mpeg";

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedSpeech {
    pub audio: Bytes,
    pub mime_type: &'static str,
    pub language_tag: String,
}

impl SynthesizedSpeech {
    pub fn mp3(audio: Bytes, language_tag: impl Into<String>) -> Self {
        Self {
            audio,
            mime_type: MPEG_MIME,
            language_tag: language_tag.into(),
        }
    }
}
