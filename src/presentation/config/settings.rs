use std::path::PathBuf;
use std::time::Duration;

use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::audio::{DEFAULT_SPEECH_ENDPOINT, DEFAULT_TTS_ENDPOINT};

const BYTES_PER_MB: usize = 1024 * 1024;

const DEFAULT_SYNTHESIS_LANGUAGES: [&str; 19] = [
    "en", "hi", "kn", "ta", "te", "bn", "gu", "ml", "mr", "ur", "ne", "fr", "de", "es", "it",
    "pt", "ja", "ko", "zh",
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub audio: AudioSettings,
    pub recognizer: RecognizerSettings,
    pub synthesizer: SynthesizerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub upload_dir: PathBuf,
    pub max_payload_mb: usize,
}

impl AudioSettings {
    pub fn max_payload_bytes(&self) -> usize {
        self.max_payload_mb * BYTES_PER_MB
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognizerSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl RecognizerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesizerSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub supported_languages: Vec<String>,
}

impl SynthesizerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.<Env>` if present, then `APP_*` variables
    /// (`APP_SERVER__PORT=8080`, `APP_SYNTHESIZER__SUPPORTED_LANGUAGES=en,hi`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let upload_dir = std::env::temp_dir().join("assistive-uploads");

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("audio.upload_dir", upload_dir.to_string_lossy().to_string())?
            .set_default("audio.max_payload_mb", 50)?
            .set_default("recognizer.endpoint", DEFAULT_SPEECH_ENDPOINT)?
            .set_default("recognizer.timeout_secs", 30)?
            .set_default("synthesizer.endpoint", DEFAULT_TTS_ENDPOINT)?
            .set_default("synthesizer.timeout_secs", 30)?
            .set_default(
                "synthesizer.supported_languages",
                DEFAULT_SYNTHESIS_LANGUAGES.to_vec(),
            )?
            .set_default("logging.json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("synthesizer.supported_languages"),
            )
            .build()?
            .try_deserialize()
    }
}
