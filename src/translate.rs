//! Arabic to French translation placeholder.
//!
//! No translation backend is wired in yet: the response echoes the input in a
//! fixed format so clients can integrate against the endpoint today.

use serde::{Deserialize, Serialize};

const PLACEHOLDER_PREFIX: &str = "Traduction de : ";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationRequest {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translated: String,
}

/// Returns the placeholder translation for `text`, or `None` when there is
/// nothing to translate.
pub fn translate(request: &TranslationRequest) -> Option<TranslationResponse> {
    let text = request.text.as_deref().filter(|t| !t.is_empty())?;
    Some(TranslationResponse {
        translated: format!("{}{}", PLACEHOLDER_PREFIX, text),
    })
}
