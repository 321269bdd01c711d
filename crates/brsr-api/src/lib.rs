//! # brsr-api — Axum API Service for the BRSR Disclosure Stack
//!
//! The transport layer over the form engine: report CRUD, section saves
//! and field/row edits, the completion checklist, submission gating, chart
//! datasets, and PDF export.
//!
//! ## API Surface
//!
//! | Prefix                                | Module                 | Domain              |
//! |---------------------------------------|------------------------|---------------------|
//! | `/v1/reports`                         | [`routes::reports`]    | Report lifecycle    |
//! | `/v1/reports/:id/sections/*`          | [`routes::sections`]   | Section editing     |
//! | `/v1/reports/:id/checklist`, `submit` | [`routes::checklist`]  | Review & submission |
//! | `/v1/reports/:id/charts/*`, `export`  | [`routes::charts`]     | Rendering boundary  |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → AuthMiddleware → Handler
//! ```
//!
//! Health probes (`/health/*`) are mounted outside the auth middleware so
//! they remain accessible without credentials.
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers — merge/mutate/evaluate live in
//!   `brsr-form` and `brsr-report`; handlers orchestrate and translate
//!   errors.
//! - All errors map to structured HTTP responses via `AppError`.

pub mod auth;
pub mod db;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::{AppConfig, AppState};

use axum::middleware::from_fn;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::AuthConfig;
use crate::middleware::metrics::ApiMetrics;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let auth_config = AuthConfig {
        token: state.config.auth_token.clone(),
    };
    let metrics = ApiMetrics::new();

    // Authenticated API routes.
    let api = Router::new()
        .merge(routes::reports::router())
        .merge(routes::sections::router())
        .merge(routes::checklist::router())
        .merge(routes::charts::router())
        .merge(openapi::router())
        .layer(from_fn(auth::auth_middleware))
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(auth_config))
        .layer(axum::Extension(metrics))
        .with_state(state);

    // Unauthenticated health probes.
    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
