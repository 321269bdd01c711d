//! # brsr-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the BRSR Disclosure Stack API.
//! Binds to configurable port (default 8080).

use brsr_api::state::AppConfig;
use brsr_render::{PdfBackend, RemotePdfRenderer, RendererConfig, RendererConfigError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let auth_token = std::env::var("AUTH_TOKEN").ok();
    if auth_token.is_none() {
        tracing::warn!("AUTH_TOKEN not set — authentication is disabled");
    }
    let config = AppConfig { port, auth_token };

    // Initialize database pool (optional — absent means in-memory only).
    let db_pool = brsr_api::db::init_pool().await.map_err(|e| {
        tracing::error!("Database initialization failed: {e}");
        e
    })?;

    // Select the PDF backend: remote when RENDERER_URL is configured,
    // the deterministic mock otherwise.
    let renderer = match RendererConfig::from_env() {
        Ok(renderer_config) => {
            tracing::info!(base_url = %renderer_config.base_url, "remote render backend configured");
            PdfBackend::Remote(RemotePdfRenderer::new(renderer_config).map_err(|e| {
                tracing::error!("Failed to create render client: {e}");
                e
            })?)
        }
        Err(RendererConfigError::MissingUrl) => {
            tracing::info!("RENDERER_URL not set — using mock render backend");
            PdfBackend::mock()
        }
        Err(e) => {
            tracing::error!("Render backend configuration invalid: {e}");
            return Err(e.into());
        }
    };

    let state = brsr_api::AppState::with_config(config, renderer, db_pool);

    // Hydrate in-memory store from database (if connected).
    state.hydrate_from_db().await.map_err(|e| {
        tracing::error!("Database hydration failed: {e}");
        e
    })?;

    let app = brsr_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("BRSR API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
