mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AudioSettings, LoggingSettings, RecognizerSettings, ServerSettings, Settings,
    SynthesizerSettings,
};
