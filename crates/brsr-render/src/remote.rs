//! # Remote PDF Renderer
//!
//! HTTP client for an external rendering service. The service receives the
//! full [`RenderRequest`] as JSON at `POST {base}/render/pdf` and answers
//! with the document bytes. Requests carry an explicit timeout — an export
//! abandoned by the user must not hold a connection open indefinitely.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::pdf::{RenderError, RenderRequest, RenderedPdf};

/// Configuration for the remote rendering service.
///
/// Custom `Debug` redacts the `api_token` to prevent credential leakage
/// in log output.
#[derive(Clone)]
pub struct RendererConfig {
    /// Base URL of the rendering service.
    pub base_url: Url,
    /// Bearer token for the rendering service, if it requires one.
    pub api_token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for RendererConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Error building a [`RendererConfig`] or its HTTP client.
#[derive(Error, Debug)]
pub enum RendererConfigError {
    /// `RENDERER_URL` is not set.
    #[error("RENDERER_URL is not set")]
    MissingUrl,

    /// `RENDERER_URL` is not a valid URL.
    #[error("RENDERER_URL is not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

impl RendererConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `RENDERER_URL` (required — absence means "use the mock backend")
    /// - `RENDERER_API_TOKEN` (optional)
    /// - `RENDERER_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, RendererConfigError> {
        let raw = std::env::var("RENDERER_URL").map_err(|_| RendererConfigError::MissingUrl)?;
        Ok(Self {
            base_url: Url::parse(&raw)?,
            api_token: std::env::var("RENDERER_API_TOKEN").ok(),
            timeout_secs: std::env::var("RENDERER_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// HTTP client for the external rendering service.
#[derive(Debug, Clone)]
pub struct RemotePdfRenderer {
    http: reqwest::Client,
    endpoint: Url,
}

impl RemotePdfRenderer {
    /// Build a renderer client from configuration.
    pub fn new(config: RendererConfig) -> Result<Self, RendererConfigError> {
        let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if let Some(token) = &config.api_token {
            let mut headers = reqwest::header::HeaderMap::new();
            if let Ok(value) =
                reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
            {
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
            builder = builder.default_headers(headers);
        }
        let http = builder.build()?;
        let endpoint = config
            .base_url
            .join("render/pdf")
            .map_err(RendererConfigError::InvalidUrl)?;
        Ok(Self { http, endpoint })
    }

    /// Render the request on the remote service.
    pub async fn render(&self, request: &RenderRequest) -> Result<RenderedPdf, RenderError> {
        let endpoint = self.endpoint.to_string();
        tracing::debug!(endpoint = %endpoint, report_id = %request.report_id, "rendering via remote service");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|source| RenderError::Unreachable {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::Failed {
                endpoint,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| RenderError::Unreachable {
                endpoint: endpoint.clone(),
                source,
            })?;

        Ok(RenderedPdf {
            bytes: bytes.to_vec(),
            content_type: "application/pdf",
        })
    }
}
