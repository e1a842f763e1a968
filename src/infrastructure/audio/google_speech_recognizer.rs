use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{Recognition, Recognizer, RecognizerError};
use crate::domain::{DecodedAudio, LanguageCode};

pub const DEFAULT_SPEECH_ENDPOINT: &str = "http://www.google.com/speech-api/v2/recognize";

/// Client for the Google Speech API v2 `recognize` endpoint.
///
/// Audio is sent as `audio/l16` (signed 16-bit little-endian PCM). The endpoint answers
/// with newline-delimited JSON objects; the first is usually an empty `{"result":[]}`.
pub struct GoogleSpeechRecognizer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GoogleSpeechRecognizer {
    pub fn new(endpoint: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_SPEECH_ENDPOINT.to_string()),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SpeechResponse {
    #[serde(default)]
    result: Vec<SpeechResult>,
}

#[derive(Debug, Deserialize)]
struct SpeechResult {
    #[serde(default)]
    alternative: Vec<SpeechAlternative>,
}

#[derive(Debug, Deserialize)]
struct SpeechAlternative {
    transcript: String,
    confidence: Option<f32>,
}

/// Picks the transcript out of an NDJSON response body.
pub fn parse_recognition_body(body: &str) -> Result<Recognition, RecognizerError> {
    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let response: SpeechResponse = serde_json::from_str(line)
            .map_err(|e| RecognizerError::InvalidResponse(format!("parse line: {}", e)))?;

        let Some(result) = response
            .result
            .into_iter()
            .find(|r| !r.alternative.is_empty())
        else {
            continue;
        };

        let mut alternatives = result.alternative;
        let position = alternatives
            .iter()
            .position(|a| a.confidence.is_some())
            .unwrap_or(0);
        let best = alternatives.swap_remove(position);

        return Ok(Recognition::Transcript(best.transcript));
    }

    Ok(Recognition::NoMatch)
}

#[async_trait]
impl Recognizer for GoogleSpeechRecognizer {
    async fn recognize(
        &self,
        audio: &DecodedAudio,
        language: &LanguageCode,
    ) -> Result<Recognition, RecognizerError> {
        let mut query: Vec<(&str, &str)> = vec![
            ("client", "chromium"),
            ("lang", language.as_str()),
            ("pFilter", "0"),
        ];
        if let Some(key) = &self.api_key {
            query.push(("key", key.as_str()));
        }

        let content_type = format!("audio/l16; rate={};", audio.sample_rate());

        tracing::debug!(
            endpoint = %self.endpoint,
            language = %language,
            duration_secs = audio.duration_secs(),
            "Sending audio to Google Speech API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&query)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(audio.to_pcm16_le())
            .send()
            .await
            .map_err(|e| RecognizerError::RequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognizerError::RequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecognizerError::RequestFailed(format!("body: {}", e)))?;

        let recognition = parse_recognition_body(&body)?;

        match &recognition {
            Recognition::Transcript(text) => {
                tracing::info!(chars = text.len(), "Google Speech recognition completed")
            }
            Recognition::NoMatch => tracing::info!("Google Speech returned no transcript"),
        }

        Ok(recognition)
    }
}
