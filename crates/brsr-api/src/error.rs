//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps domain errors from brsr-core, brsr-form, and brsr-report to HTTP
//! status codes. Returns JSON error response bodies with error code,
//! message, and optional details. Never exposes internal error details in
//! production responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses use this format for consistency across the API
/// surface. The `details` field carries additional context (e.g. the
/// missing checklist entries on a rejected submission) and is omitted for
/// 500-class errors to prevent information leakage.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details, present only for client errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<serde_json::Value>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request validation failed (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Request validation failed with structured details (422).
    #[error("validation error: {message}")]
    ValidationWithDetails {
        /// Human-readable message.
        message: String,
        /// Structured context for the client (e.g. the failing checklist).
        details: serde_json::Value,
    },

    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Authentication failure — missing or invalid token (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Conflict with current resource state (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A required external collaborator is unavailable (503).
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error (500). Message is logged but not returned to
    /// the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation(_) | Self::ValidationWithDetails { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR")
            }
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::ServiceUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        // Log internal errors for operator visibility.
        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let details = match self {
            Self::ValidationWithDetails { details, .. } => Some(details),
            _ => None,
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert brsr-core validation errors (unknown section key, bad path) to
/// API errors.
impl From<brsr_core::ValidationError> for AppError {
    fn from(err: brsr_core::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Convert row-edit errors to API errors.
impl From<brsr_form::RowEditError> for AppError {
    fn from(err: brsr_form::RowEditError) -> Self {
        match &err {
            brsr_form::RowEditError::NotAnArray { .. } => Self::Validation(err.to_string()),
            brsr_form::RowEditError::IndexOutOfRange { .. }
            | brsr_form::RowEditError::RowNotFound { .. } => Self::NotFound(err.to_string()),
        }
    }
}

/// Convert report lifecycle errors to API errors.
impl From<brsr_report::ReportError> for AppError {
    fn from(err: brsr_report::ReportError) -> Self {
        match &err {
            brsr_report::ReportError::AlreadySubmitted { .. }
            | brsr_report::ReportError::VersionConflict { .. } => Self::Conflict(err.to_string()),
            brsr_report::ReportError::Incomplete { .. } => Self::Validation(err.to_string()),
        }
    }
}

/// Convert render errors to API errors. A failing rendering service is a
/// retryable 503, not an internal fault of this API.
impl From<brsr_render::RenderError> for AppError {
    fn from(err: brsr_render::RenderError) -> Self {
        Self::ServiceUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_variants() {
        let cases: Vec<(AppError, StatusCode, &str)> = vec![
            (
                AppError::NotFound("x".into()),
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
            ),
            (
                AppError::Validation("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
            ),
            (
                AppError::BadRequest("x".into()),
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
            ),
            (
                AppError::Unauthorized("x".into()),
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
            ),
            (
                AppError::Conflict("x".into()),
                StatusCode::CONFLICT,
                "CONFLICT",
            ),
            (
                AppError::ServiceUnavailable("x".into()),
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
            ),
            (
                AppError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
            ),
        ];
        for (err, status, code) in cases {
            let (s, c) = err.status_and_code();
            assert_eq!(s, status);
            assert_eq!(c, code);
        }
    }

    #[test]
    fn unknown_section_key_maps_to_validation() {
        let err = AppError::from(brsr_core::ValidationError::UnknownSectionKey(
            "section_z".to_string(),
        ));
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = AppError::from(brsr_form::RowEditError::RowNotFound {
            path: "arr".to_string(),
            id: brsr_core::RowId::new(),
        });
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn already_submitted_maps_to_conflict() {
        let err = AppError::from(brsr_report::ReportError::AlreadySubmitted {
            id: brsr_core::ReportId::new(),
        });
        assert!(matches!(err, AppError::Conflict(_)));
    }

    use http_body_util::BodyExt;

    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_not_found() {
        let (status, body) = response_parts(AppError::NotFound("report 123".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error.code, "NOT_FOUND");
        assert!(body.error.message.contains("report 123"));
        assert!(body.error.details.is_none());
    }

    #[tokio::test]
    async fn into_response_validation_with_details() {
        let (status, body) = response_parts(AppError::ValidationWithDetails {
            message: "report is incomplete".into(),
            details: serde_json::json!({"missing": ["Section A"]}),
        })
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        let details = body.error.details.unwrap();
        assert_eq!(details["missing"][0], "Section A");
    }

    #[tokio::test]
    async fn into_response_internal_hides_details() {
        let (status, body) = response_parts(AppError::Internal("db connection failed".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            !body.error.message.contains("db connection"),
            "internal error details must not leak: {}",
            body.error.message
        );
        assert_eq!(body.error.message, "An internal error occurred");
    }
}
