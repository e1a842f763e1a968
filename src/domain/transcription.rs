pub const ENGINE_NAME: &str = "google";

/// The recognizer reports no confidence; this constant stands in for one.
pub const PLACEHOLDER_CONFIDENCE: f32 = 0.95;

#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptionResult {
    Success(Transcript),
    Unintelligible,
    ServiceFailure { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    pub engine: String,
    pub confidence: f32,
}

impl Transcript {
    pub fn new(text: impl Into<String>, engine: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            engine: engine.into(),
            confidence,
        }
    }
}
