use std::sync::Arc;

use crate::application::services::{SynthesisService, TranscriptionService};

#[derive(Clone)]
pub struct AppState {
    pub transcription_service: Arc<TranscriptionService>,
    pub synthesis_service: Arc<SynthesisService>,
    pub max_payload_bytes: usize,
}

impl AppState {
    pub fn new(
        transcription_service: Arc<TranscriptionService>,
        synthesis_service: Arc<SynthesisService>,
        max_payload_bytes: usize,
    ) -> Self {
        Self {
            transcription_service,
            synthesis_service,
            max_payload_bytes,
        }
    }

    pub fn max_payload_mb(&self) -> usize {
        self.max_payload_bytes / (1024 * 1024)
    }
}
