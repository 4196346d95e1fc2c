pub mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{HealthResponse, JsonBody};

use crate::{Result, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the router with both API endpoints and the health probe.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/extract-text",
            post(handlers::extract_text).fallback(handlers::extract_text_method_not_allowed),
        )
        .route(
            "/api/translate-ar-fr",
            post(handlers::translate_ar_fr).fallback(handlers::translate_method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let state = AppState::from_config(&config);

    let mut router = app(state);
    if config.server.cors {
        info!("Enabling permissive CORS");
        router = router.layer(CorsLayer::permissive());
    }

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
