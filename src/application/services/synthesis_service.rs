use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::Synthesizer;
use crate::domain::{DEFAULT_SYNTHESIS_TAG, LanguageCode, SynthesizedSpeech};

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("No text provided")]
    EmptyText,
    #[error("Speech synthesis failed: {0}")]
    Failed(String),
}

pub struct SynthesisService {
    synthesizer: Arc<dyn Synthesizer>,
    timeout: Duration,
}

impl SynthesisService {
    pub fn new(synthesizer: Arc<dyn Synthesizer>, timeout: Duration) -> Self {
        Self {
            synthesizer,
            timeout,
        }
    }

    /// Engine tag for `language`, or `en` when the synthesizer does not speak it.
    pub fn resolve_tag(&self, language: &LanguageCode) -> String {
        let tag = language.synthesis_tag();
        if self.synthesizer.supports_language(&tag) {
            tag
        } else {
            tracing::warn!(
                language = %language,
                tag = %tag,
                fallback = DEFAULT_SYNTHESIS_TAG,
                "Unsupported synthesis language, falling back"
            );
            DEFAULT_SYNTHESIS_TAG.to_string()
        }
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<SynthesizedSpeech, SynthesisError> {
        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let tag = self.resolve_tag(language);

        let audio = tokio::time::timeout(self.timeout, self.synthesizer.synthesize(text, &tag))
            .await
            .map_err(|_| {
                SynthesisError::Failed(format!(
                    "synthesizer timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| SynthesisError::Failed(e.to_string()))?;

        tracing::info!(bytes = audio.len(), tag = %tag, "Speech synthesized");

        Ok(SynthesizedSpeech::mp3(audio, tag))
    }
}
