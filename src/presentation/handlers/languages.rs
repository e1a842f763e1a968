use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

use crate::domain::LanguageCode;

#[derive(Serialize)]
pub struct SupportedLanguagesResponse {
    pub languages: BTreeMap<&'static str, &'static str>,
}

pub async fn supported_languages_handler() -> Json<SupportedLanguagesResponse> {
    Json(SupportedLanguagesResponse {
        languages: LanguageCode::supported().collect(),
    })
}
