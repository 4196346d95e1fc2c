mod client;
mod types;

#[cfg(test)]
pub use client::MockOcrClient;
pub use client::{OcrClient, OcrSpaceClient};
pub use types::{OcrResult, OcrSpaceResponse, ParsedResult};
