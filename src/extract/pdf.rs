use crate::{Error, Result};
use tracing::debug;

/// Extracts the text layer of an in-memory PDF.
///
/// Parsing is CPU bound and `pdf-extract` may panic on malformed input, so it
/// runs on the blocking pool and a panic is reported as an ordinary error.
pub async fn extract_text(bytes: Vec<u8>) -> Result<String> {
    let len = bytes.len();
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| Error::pdf(format!("parser aborted: {}", e)))?
        .map_err(|e| Error::pdf(e.to_string()))?;

    debug!("Extracted {} chars from {} byte PDF", text.len(), len);
    Ok(text)
}

/// True when the buffer starts with the PDF magic bytes.
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
}
