use axum::Router;
use axum_test::TestServer;
use text_extract_api::{
    config::{Config, LogsConfig, OcrConfig, ServerConfig},
    server::{self, AppState},
};
use wiremock::MockServer;

/// Env var name that no test ever sets, so key lookup falls through to the
/// configured `api_key`.
pub const UNSET_KEY_ENV: &str = "TEXT_EXTRACT_API_TEST_UNSET_OCR_KEY";

pub const TEST_API_KEY: &str = "test-ocr-key";

pub const OCR_PATH: &str = "/parse/image";

/// Text drawn by `fixtures/bonjour.pdf`.
pub const FIXTURE_PDF_TEXT: &str = "Bonjour";

pub fn fixture_pdf() -> Vec<u8> {
    include_bytes!("../fixtures/bonjour.pdf").to_vec()
}

/// Create a test configuration pointing the OCR client at `ocr_base`
pub fn create_test_config(ocr_base: &str, api_key: Option<&str>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors: false,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        ocr: OcrConfig {
            endpoint: format!("{}{}", ocr_base, OCR_PATH),
            language: "ara".to_string(),
            api_key_env: UNSET_KEY_ENV.to_string(),
            api_key: api_key.map(str::to_string),
        },
    }
}

pub fn create_test_app(config: &Config) -> Router {
    server::app(AppState::from_config(config))
}

/// In-process server plus the wiremock instance standing in for both the
/// PDF host and the OCR provider.
pub async fn create_test_server(api_key: Option<&str>) -> (TestServer, MockServer) {
    let upstream = MockServer::start().await;
    let config = create_test_config(&upstream.uri(), api_key);
    let server = TestServer::new(create_test_app(&config)).expect("failed to start test server");
    (server, upstream)
}
