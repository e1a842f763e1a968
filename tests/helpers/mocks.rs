use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use assistive_backend::application::ports::{
    AudioDecoder, AudioDecoderError, Recognition, Recognizer, RecognizerError, Synthesizer,
    SynthesizerError,
};
use assistive_backend::domain::{AudioBlob, DecodedAudio, LanguageCode};

#[derive(Debug, Clone)]
pub enum RecognizerBehavior {
    Transcript(String),
    NoMatch,
    Fail(String),
    Panic,
    Hang,
    EchoSampleCount,
}

pub struct ScriptedRecognizer {
    behavior: RecognizerBehavior,
    watch_dir: Option<PathBuf>,
    languages: Mutex<Vec<String>>,
    staged_files: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRecognizer {
    pub fn new(behavior: RecognizerBehavior) -> Self {
        Self {
            behavior,
            watch_dir: None,
            languages: Mutex::new(Vec::new()),
            staged_files: Mutex::new(Vec::new()),
        }
    }

    pub fn transcript(text: &str) -> Self {
        Self::new(RecognizerBehavior::Transcript(text.to_string()))
    }

    /// Records the directory listing of `dir` at the moment each call arrives.
    pub fn watching(mut self, dir: &Path) -> Self {
        self.watch_dir = Some(dir.to_path_buf());
        self
    }

    pub fn languages(&self) -> Vec<String> {
        self.languages.lock().unwrap().clone()
    }

    pub fn staged_files(&self) -> Vec<Vec<String>> {
        self.staged_files.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.languages.lock().unwrap().len()
    }
}

pub fn list_dir(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl Recognizer for ScriptedRecognizer {
    async fn recognize(
        &self,
        audio: &DecodedAudio,
        language: &LanguageCode,
    ) -> Result<Recognition, RecognizerError> {
        self.languages
            .lock()
            .unwrap()
            .push(language.as_str().to_string());

        if let Some(dir) = &self.watch_dir {
            self.staged_files.lock().unwrap().push(list_dir(dir));
        }

        match &self.behavior {
            RecognizerBehavior::Transcript(text) => Ok(Recognition::Transcript(text.clone())),
            RecognizerBehavior::NoMatch => Ok(Recognition::NoMatch),
            RecognizerBehavior::Fail(message) => {
                Err(RecognizerError::RequestFailed(message.clone()))
            }
            RecognizerBehavior::Panic => panic!("recognizer exploded"),
            RecognizerBehavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(Recognition::NoMatch)
            }
            RecognizerBehavior::EchoSampleCount => Ok(Recognition::Transcript(format!(
                "samples:{}",
                audio.samples().len()
            ))),
        }
    }
}

pub struct ScriptedSynthesizer {
    supported: HashSet<String>,
    failure: Option<String>,
    delay: Option<Duration>,
    requests: Mutex<Vec<(String, String)>>,
}

impl ScriptedSynthesizer {
    pub fn new() -> Self {
        Self {
            supported: ["en", "hi", "kn", "ta", "te"]
                .into_iter()
                .map(String::from)
                .collect(),
            failure: None,
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }

    /// `(text, language_tag)` pairs in call order.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

pub const FAKE_MP3: &[u8] = b"ID3\x04\x00fake-mp3-frames";

#[async_trait]
impl Synthesizer for ScriptedSynthesizer {
    async fn synthesize(&self, text: &str, language_tag: &str) -> Result<Bytes, SynthesizerError> {
        self.requests
            .lock()
            .unwrap()
            .push((text.to_string(), language_tag.to_string()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.failure {
            Some(message) => Err(SynthesizerError::RequestFailed(message.clone())),
            None => Ok(Bytes::from_static(FAKE_MP3)),
        }
    }

    fn supports_language(&self, language_tag: &str) -> bool {
        self.supported.contains(language_tag)
    }
}

pub struct PanickingDecoder;

impl AudioDecoder for PanickingDecoder {
    fn decode(&self, _blob: &AudioBlob) -> Result<DecodedAudio, AudioDecoderError> {
        panic!("decoder exploded");
    }
}
