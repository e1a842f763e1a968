use crate::domain::LanguageCode;

/// Language values carried by a transcription request, by source.
#[derive(Debug, Clone, Default)]
pub struct LanguageHints {
    pub form: Option<String>,
    pub query: Option<String>,
    pub header: Option<String>,
}

/// Form field, then query parameter, then `X-STT-Language` header, then `en-US`.
/// Blank values count as absent. No validation happens here.
pub fn resolve_transcription_language(hints: &LanguageHints) -> LanguageCode {
    [&hints.form, &hints.query, &hints.header]
        .into_iter()
        .find_map(|hint| non_blank(hint.as_deref()))
        .map(LanguageCode::new)
        .unwrap_or_default()
}

pub fn resolve_synthesis_language(requested: Option<&str>) -> LanguageCode {
    non_blank(requested)
        .map(LanguageCode::new)
        .unwrap_or_default()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
