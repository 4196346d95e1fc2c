use serde::Deserialize;

/// Response envelope of the OCR.space `parse/image` endpoint. Only the fields
/// the service reads are modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct OcrSpaceResponse {
    #[serde(rename = "ParsedResults", default)]
    pub parsed_results: Option<Vec<ParsedResult>>,
    #[serde(rename = "IsErroredOnProcessing", default)]
    pub is_errored_on_processing: bool,
    #[serde(rename = "ErrorMessage", default)]
    pub error_message: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParsedResult {
    #[serde(rename = "ParsedText", default)]
    pub parsed_text: Option<String>,
}

/// Text fragments recognised by the provider, one per parsed page or region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OcrResult {
    pub fragments: Vec<String>,
}

impl OcrResult {
    pub fn new(fragments: Vec<String>) -> Self {
        Self { fragments }
    }

    /// Drops carriage returns and each fragment's trailing line breaks, joins
    /// fragments with a single newline, trims.
    pub fn into_text(self) -> String {
        self.fragments
            .iter()
            .map(|fragment| fragment.replace('\r', "").trim_end_matches('\n').to_string())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

impl From<Vec<ParsedResult>> for OcrResult {
    fn from(results: Vec<ParsedResult>) -> Self {
        Self::new(
            results
                .into_iter()
                .map(|r| r.parsed_text.unwrap_or_default())
                .collect(),
        )
    }
}
