use super::types::*;
use crate::{Error, Result, config::OcrConfig};
use async_trait::async_trait;
use reqwest::multipart::Form;
use tracing::{debug, warn};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OcrClient: Send + Sync {
    /// Runs OCR on the image at `image_url`, authenticating with `api_key`.
    async fn recognize(&self, image_url: &str, api_key: &str) -> Result<OcrResult>;
}

/// Client for the OCR.space `parse/image` API.
pub struct OcrSpaceClient {
    client: reqwest::Client,
    endpoint: String,
    language: String,
}

impl OcrSpaceClient {
    pub fn new(client: reqwest::Client, config: &OcrConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            language: config.language.clone(),
        }
    }
}

#[async_trait]
impl OcrClient for OcrSpaceClient {
    async fn recognize(&self, image_url: &str, api_key: &str) -> Result<OcrResult> {
        debug!("Submitting {} to OCR provider at {}", image_url, self.endpoint);

        let form = Form::new()
            .text("url", image_url.to_string())
            .text("language", self.language.clone())
            .text("isOverlayRequired", "false");

        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("OCR provider returned status {}", status);
            return Err(Error::ocr_failed(format!("provider returned status {}", status)));
        }

        // A body that is not JSON at all is an unexpected fault, not an OCR failure.
        let Some(body) = response.json::<Option<OcrSpaceResponse>>().await? else {
            warn!("OCR provider returned a null body");
            return Err(Error::ocr_failed("response body is null"));
        };

        let Some(parsed_results) = body.parsed_results else {
            warn!(
                "OCR response has no ParsedResults (errored: {}, message: {:?})",
                body.is_errored_on_processing, body.error_message
            );
            return Err(Error::ocr_failed("response has no ParsedResults"));
        };

        debug!("OCR provider returned {} fragments", parsed_results.len());
        Ok(OcrResult::from(parsed_results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_uses_configured_endpoint_and_language() {
        let config = OcrConfig {
            endpoint: "http://localhost:9999/parse".to_string(),
            language: "fre".to_string(),
            ..OcrConfig::default()
        };
        let client = OcrSpaceClient::new(reqwest::Client::new(), &config);

        assert_eq!(client.endpoint, "http://localhost:9999/parse");
        assert_eq!(client.language, "fre");
    }
}
