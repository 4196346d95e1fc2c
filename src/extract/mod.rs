pub mod pdf;

use crate::{Error, Result, config::OcrConfig, ocr::OcrClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRequest {
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub content: String,
}

/// Where the text comes from. Empty strings count as absent and a PDF takes
/// precedence over an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionSource<'a> {
    Pdf(&'a str),
    Image(&'a str),
}

impl ExtractionRequest {
    pub fn source(&self) -> Result<ExtractionSource<'_>> {
        match (non_empty(&self.pdf_url), non_empty(&self.image_url)) {
            (Some(url), _) => Ok(ExtractionSource::Pdf(url)),
            (None, Some(url)) => Ok(ExtractionSource::Image(url)),
            (None, None) => Err(Error::MissingInput),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|url| !url.is_empty())
}

pub struct TextExtractor {
    http: reqwest::Client,
    ocr: Arc<dyn OcrClient>,
    ocr_config: OcrConfig,
}

impl TextExtractor {
    pub fn new(http: reqwest::Client, ocr: Arc<dyn OcrClient>, ocr_config: OcrConfig) -> Self {
        Self {
            http,
            ocr,
            ocr_config,
        }
    }

    pub async fn extract(&self, request: &ExtractionRequest) -> Result<ExtractionResponse> {
        let content = match request.source()? {
            ExtractionSource::Pdf(url) => self.extract_pdf(url).await?,
            ExtractionSource::Image(url) => self.extract_image(url).await?,
        };

        Ok(ExtractionResponse { content })
    }

    async fn extract_pdf(&self, url: &str) -> Result<String> {
        info!("Extracting text from PDF at {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("PDF fetch from {} returned status {}", url, status);
            return Err(Error::PdfUnavailable {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let has_pdf_header = pdf::looks_like_pdf(&bytes);
        if !has_pdf_header {
            warn!("Body fetched from {} does not start with a PDF header", url);
        }

        let text = match pdf::extract_text(bytes.to_vec()).await {
            Err(Error::Pdf(msg)) if !has_pdf_header => {
                return Err(Error::pdf(format!("fetched document is not a PDF: {}", msg)));
            }
            other => other?,
        };
        Ok(text.trim().to_string())
    }

    async fn extract_image(&self, url: &str) -> Result<String> {
        let api_key = self
            .ocr_config
            .resolve_api_key()
            .ok_or_else(|| Error::OcrNotConfigured {
                env_var: self.ocr_config.api_key_env.clone(),
            })?;

        info!("Running OCR on image at {}", url);
        let result = self.ocr.recognize(url, &api_key).await?;
        debug!("OCR produced {} fragments", result.fragments.len());

        Ok(result.into_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocr::{MockOcrClient, OcrResult};
    use pretty_assertions::assert_eq;

    const UNSET_ENV: &str = "TEXT_EXTRACT_API_EXTRACT_TEST_UNSET_KEY";

    fn ocr_config(api_key: Option<&str>) -> OcrConfig {
        OcrConfig {
            api_key_env: UNSET_ENV.to_string(),
            api_key: api_key.map(str::to_string),
            ..OcrConfig::default()
        }
    }

    fn request(pdf_url: Option<&str>, image_url: Option<&str>) -> ExtractionRequest {
        ExtractionRequest {
            pdf_url: pdf_url.map(str::to_string),
            image_url: image_url.map(str::to_string),
        }
    }

    #[test]
    fn test_source_prefers_pdf() {
        let req = request(Some("https://a/doc.pdf"), Some("https://a/img.png"));
        assert_eq!(req.source().unwrap(), ExtractionSource::Pdf("https://a/doc.pdf"));
    }

    #[test]
    fn test_source_image_when_pdf_empty() {
        let req = request(Some(""), Some("https://a/img.png"));
        assert_eq!(req.source().unwrap(), ExtractionSource::Image("https://a/img.png"));
    }

    #[test]
    fn test_source_missing() {
        assert!(matches!(request(None, None).source(), Err(Error::MissingInput)));
        assert!(matches!(
            request(Some(""), Some("")).source(),
            Err(Error::MissingInput)
        ));
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let req: ExtractionRequest =
            serde_json::from_str(r#"{"imageUrl": "https://a/img.png"}"#).unwrap();
        assert_eq!(req.pdf_url, None);
        assert_eq!(req.image_url.as_deref(), Some("https://a/img.png"));
    }

    #[tokio::test]
    async fn test_image_without_key_is_not_configured() {
        let mut ocr = MockOcrClient::new();
        ocr.expect_recognize().never();

        let extractor = TextExtractor::new(reqwest::Client::new(), Arc::new(ocr), ocr_config(None));
        let err = extractor
            .extract(&request(None, Some("https://a/img.png")))
            .await
            .unwrap_err();

        match err {
            Error::OcrNotConfigured { env_var } => assert_eq!(env_var, UNSET_ENV),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_image_passes_url_and_key_to_ocr() {
        let mut ocr = MockOcrClient::new();
        ocr.expect_recognize()
            .withf(|url, key| url.to_string() == "https://a/img.png" && key.to_string() == "secret")
            .times(1)
            .returning(|_, _| Ok(OcrResult::new(vec!["a\r\n".to_string(), "b".to_string()])));

        let extractor = TextExtractor::new(
            reqwest::Client::new(),
            Arc::new(ocr),
            ocr_config(Some("secret")),
        );
        let response = extractor
            .extract(&request(None, Some("https://a/img.png")))
            .await
            .unwrap();

        assert_eq!(response.content, "a\nb");
    }

    #[tokio::test]
    async fn test_image_ocr_error_propagates() {
        let mut ocr = MockOcrClient::new();
        ocr.expect_recognize()
            .returning(|_, _| Err(Error::ocr_failed("provider returned status 403")));

        let extractor = TextExtractor::new(
            reqwest::Client::new(),
            Arc::new(ocr),
            ocr_config(Some("secret")),
        );
        let err = extractor
            .extract(&request(None, Some("https://a/img.png")))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::OcrFailed(_)));
    }
}
