use std::fmt;

/// Lifecycle of a single transcription request.
///
/// `Succeeded`, `Rejected` and `Failed` are terminal and mutually exclusive; every
/// request moves from one of them into `Responded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptionStage {
    Received,
    Validated,
    Decoding,
    Recognizing,
    Succeeded,
    Rejected,
    Failed,
    Responded,
}

impl TranscriptionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionStage::Received => "received",
            TranscriptionStage::Validated => "validated",
            TranscriptionStage::Decoding => "decoding",
            TranscriptionStage::Recognizing => "recognizing",
            TranscriptionStage::Succeeded => "succeeded",
            TranscriptionStage::Rejected => "rejected",
            TranscriptionStage::Failed => "failed",
            TranscriptionStage::Responded => "responded",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TranscriptionStage::Succeeded | TranscriptionStage::Rejected | TranscriptionStage::Failed
        )
    }
}

impl fmt::Display for TranscriptionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
