//! Unified error handling for the shell.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::erp::ErpError;

/// Application-level error type for the shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Upstream ERP API operation failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] ErpError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// User lacks permission.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<serde_json::Value>,
}

impl AppError {
    /// Map to the response status code.
    ///
    /// The upstream taxonomy is surfaced, not flattened: auth failures pass
    /// through as auth failures, validation as 400 with field detail, and
    /// connectivity problems as 502.
    fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(err) => match err {
                ErpError::Unauthorized => StatusCode::UNAUTHORIZED,
                ErpError::Forbidden => StatusCode::FORBIDDEN,
                ErpError::Validation(_) => StatusCode::BAD_REQUEST,
                ErpError::NotFound => StatusCode::NOT_FOUND,
                ErpError::Network(_) | ErpError::Decode(_) | ErpError::UnexpectedStatus(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Report server-class errors to Sentry; client errors are expected.
        let status = self.status();
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Shell request error"
            );
        }

        // Don't expose internal error details to clients
        let (message, fields) = match &self {
            Self::Internal(_) => ("Internal server error".to_string(), None),
            Self::Upstream(ErpError::Validation(field_errors)) => (
                "Validation failed".to_string(),
                serde_json::to_value(&field_errors.0).ok(),
            ),
            Self::Upstream(err) if status.is_server_error() => {
                tracing::warn!(error = %err, "upstream failure");
                ("Upstream service error".to_string(), None)
            }
            other => (other.to_string(), None),
        };

        (status, Json(ErrorBody { error: message, fields })).into_response()
    }
}

/// Set the Sentry user context from a user ID.
pub fn set_sentry_user(user_id: i32, username: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            username: username.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::erp::FieldErrors;
    use std::collections::HashMap;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("workflow-123".to_string());
        assert_eq!(err.to_string(), "Not found: workflow-123");

        let err = AppError::BadRequest("invalid module".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid module");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            AppError::NotFound("x".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Unauthorized("x".to_string()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("x".to_string()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::BadRequest("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("x".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_taxonomy_passes_through() {
        assert_eq!(
            AppError::Upstream(ErpError::Unauthorized).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Upstream(ErpError::Forbidden).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Upstream(ErpError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Upstream(ErpError::UnexpectedStatus(500)).status(),
            StatusCode::BAD_GATEWAY
        );

        let mut map = HashMap::new();
        map.insert("name".to_owned(), vec!["required".to_owned()]);
        assert_eq!(
            AppError::Upstream(ErpError::Validation(FieldErrors(map))).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
