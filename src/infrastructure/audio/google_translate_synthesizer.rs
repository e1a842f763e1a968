use std::collections::HashSet;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};

use crate::application::ports::{Synthesizer, SynthesizerError};

pub const DEFAULT_TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// The endpoint rejects queries longer than this many characters.
const MAX_SEGMENT_CHARS: usize = 100;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Google Translate text-to-speech. Long text is spoken segment by segment and the
/// MP3 segments are concatenated.
pub struct GoogleTranslateSynthesizer {
    client: reqwest::Client,
    endpoint: String,
    supported: HashSet<String>,
}

impl GoogleTranslateSynthesizer {
    pub fn new(endpoint: Option<String>, supported_languages: Vec<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_TTS_ENDPOINT.to_string()),
            supported: supported_languages
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
        }
    }
}

/// Splits on whitespace into segments of at most `MAX_SEGMENT_CHARS` characters;
/// words longer than that are cut at character boundaries.
pub fn split_segments(text: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > MAX_SEGMENT_CHARS {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(MAX_SEGMENT_CHARS) {
                segments.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current.chars().count() + 1 + word_len
        };

        if needed > MAX_SEGMENT_CHARS {
            segments.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[async_trait]
impl Synthesizer for GoogleTranslateSynthesizer {
    async fn synthesize(&self, text: &str, language_tag: &str) -> Result<Bytes, SynthesizerError> {
        let segments = split_segments(text);
        let total = segments.len().to_string();
        let mut audio = BytesMut::new();

        tracing::debug!(
            endpoint = %self.endpoint,
            language = language_tag,
            segments = segments.len(),
            "Requesting speech from Google Translate TTS"
        );

        for (idx, segment) in segments.iter().enumerate() {
            let idx = idx.to_string();
            let textlen = segment.chars().count().to_string();

            let response = self
                .client
                .get(&self.endpoint)
                .header(reqwest::header::USER_AGENT, USER_AGENT)
                .query(&[
                    ("ie", "UTF-8"),
                    ("q", segment.as_str()),
                    ("tl", language_tag),
                    ("total", total.as_str()),
                    ("idx", idx.as_str()),
                    ("textlen", textlen.as_str()),
                    ("client", "tw-ob"),
                ])
                .send()
                .await
                .map_err(|e| SynthesizerError::RequestFailed(format!("request: {}", e)))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                return Err(SynthesizerError::RequestFailed(format!(
                    "status {}: {}",
                    status, body
                )));
            }

            let chunk = response
                .bytes()
                .await
                .map_err(|e| SynthesizerError::RequestFailed(format!("body: {}", e)))?;
            audio.extend_from_slice(&chunk);
        }

        if audio.is_empty() {
            return Err(SynthesizerError::EmptyAudio);
        }

        Ok(audio.freeze())
    }

    fn supports_language(&self, language_tag: &str) -> bool {
        self.supported.contains(language_tag)
    }
}
