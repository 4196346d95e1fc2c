use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provide either pdfUrl or imageUrl")]
    MissingInput,

    #[error("Unable to fetch PDF (upstream status {status})")]
    PdfUnavailable { status: u16 },

    #[error("PDF extraction error: {0}")]
    Pdf(String),

    #[error("OCR for images is not configured. Set {env_var} in the environment.")]
    OcrNotConfigured { env_var: String },

    #[error("OCR failed: {0}")]
    OcrFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn pdf(msg: impl Into<String>) -> Self {
        Self::Pdf(msg.into())
    }

    pub fn ocr_failed(msg: impl Into<String>) -> Self {
        Self::OcrFailed(msg.into())
    }
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Outcome of a failed request as seen by the HTTP caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    MethodNotAllowed(String),
    BadRequest(String),
    NotImplemented(String),
    Internal { detail: String },
}

impl ApiError {
    pub fn method_not_allowed(msg: impl Into<String>) -> Self {
        Self::MethodNotAllowed(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            Self::MethodNotAllowed(msg) | Self::BadRequest(msg) | Self::NotImplemented(msg) => {
                ErrorResponse {
                    error: msg.clone(),
                    detail: None,
                }
            }
            Self::Internal { detail } => ErrorResponse {
                error: "Server error".to_string(),
                detail: Some(detail.clone()),
            },
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::MissingInput => Self::BadRequest(err.to_string()),
            // The upstream status stays in the logs; callers only see the fixed message.
            Error::PdfUnavailable { .. } => Self::BadRequest("Unable to fetch PDF".to_string()),
            Error::OcrNotConfigured { .. } => Self::NotImplemented(err.to_string()),
            Error::OcrFailed(_) => Self::BadRequest("OCR failed or invalid response".to_string()),
            other => Self::Internal {
                detail: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal { detail } = &self {
            error!("Request failed with internal error: {}", detail);
        }
        (status, Json(self.body())).into_response()
    }
}
