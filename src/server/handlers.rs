use super::types::{HealthResponse, JsonBody};
use crate::{
    config::Config,
    error::ApiError,
    extract::{ExtractionRequest, ExtractionResponse, TextExtractor},
    ocr::OcrSpaceClient,
    translate::{self, TranslationRequest, TranslationResponse},
};
use axum::{extract::State, http::Method, response::Json};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<TextExtractor>,
}

impl AppState {
    pub fn new(extractor: TextExtractor) -> Self {
        Self {
            extractor: Arc::new(extractor),
        }
    }

    /// Wires the OCR.space client and a shared HTTP client from configuration.
    pub fn from_config(config: &Config) -> Self {
        let http = reqwest::Client::new();
        let ocr = OcrSpaceClient::new(http.clone(), &config.ocr);
        Self::new(TextExtractor::new(http, Arc::new(ocr), config.ocr.clone()))
    }
}

pub async fn extract_text(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ExtractionRequest>,
) -> Result<Json<ExtractionResponse>, ApiError> {
    info!(
        "Received extraction request (pdf: {}, image: {})",
        request.pdf_url.is_some(),
        request.image_url.is_some()
    );

    let response = state.extractor.extract(&request).await.map_err(|e| {
        warn!("Extraction failed: {}", e);
        ApiError::from(e)
    })?;

    info!("Extracted {} chars", response.content.len());
    Ok(Json(response))
}

pub async fn extract_text_method_not_allowed(method: Method) -> ApiError {
    warn!("Rejected {} on /api/extract-text", method);
    ApiError::method_not_allowed("Method not allowed")
}

pub async fn translate_ar_fr(
    JsonBody(request): JsonBody<TranslationRequest>,
) -> Result<Json<TranslationResponse>, ApiError> {
    translate::translate(&request)
        .map(Json)
        .ok_or_else(|| ApiError::bad_request("Texte manquant"))
}

pub async fn translate_method_not_allowed(method: Method) -> ApiError {
    warn!("Rejected {} on /api/translate-ar-fr", method);
    ApiError::method_not_allowed("Méthode non autorisée")
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
