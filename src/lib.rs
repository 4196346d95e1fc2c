pub mod config;
pub mod error;
pub mod extract;
pub mod ocr;
pub mod server;
pub mod translate;

pub use error::{ApiError, Error, Result};
