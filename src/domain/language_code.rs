use std::fmt;

pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_SYNTHESIS_TAG: &str = "en";

/// Recognition languages with their display names and synthesizer tags.
const SUPPORTED_LANGUAGES: [(&str, &str, &str); 5] = [
    ("en-US", "English", "en"),
    ("hi-IN", "Hindi", "hi"),
    ("kn-IN", "Kannada", "kn"),
    ("ta-IN", "Tamil", "ta"),
    ("te-IN", "Telugu", "te"),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Unvalidated; callers decide how to treat unsupported codes.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_supported(&self) -> bool {
        SUPPORTED_LANGUAGES
            .iter()
            .any(|(code, _, _)| *code == self.0)
    }

    /// Falls back to `en-US` when the code is outside the recognition table.
    pub fn for_recognition(&self) -> LanguageCode {
        if self.is_supported() {
            self.clone()
        } else {
            LanguageCode::default()
        }
    }

    /// Short synthesizer tag. Unmapped codes yield their lowercased primary subtag.
    pub fn synthesis_tag(&self) -> String {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(code, _, _)| *code == self.0)
            .map(|(_, _, tag)| (*tag).to_string())
            .unwrap_or_else(|| {
                self.0
                    .split(['-', '_'])
                    .next()
                    .unwrap_or_default()
                    .to_ascii_lowercase()
            })
    }

    pub fn supported() -> impl Iterator<Item = (&'static str, &'static str)> {
        SUPPORTED_LANGUAGES
            .iter()
            .map(|(code, name, _)| (*code, *name))
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
