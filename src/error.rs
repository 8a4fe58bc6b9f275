use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error;

use crate::service::ServiceError;

pub type AppResult<T> = Result<T, AppError>;

/// Transport-level error type. Every failure response carries the HTTP
/// status mirrored inside the body as `code`, plus a message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Gate rejection: missing, malformed or expired bearer token. Both
    /// cases are client errors and both map to 400.
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Token signing failed while issuing the login credential.
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("{0}")]
    Service(#[from] ServiceError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Jwt(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Service(e) => match e {
                ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// User-facing message; storage diagnostics never reach this.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Auth(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Jwt(_) => "Error interno".to_string(),
            AppError::Service(e) => e.to_string(),
        }
    }

    /// Log with a level matching the severity of the failure.
    pub fn log(&self) {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Server error occurred");
        } else if matches!(self, AppError::Auth(_)) {
            tracing::warn!(error = %self, "Request rejected by access gate");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Client error occurred");
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        self.log();

        let status = self.status_code();
        let body = json!({
            "code": status.as_u16(),
            "message": self.user_message(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_classifications_map_to_expected_statuses() {
        let bad = AppError::Service(ServiceError::BadRequest("x".into()));
        let missing = AppError::Service(ServiceError::NotFound("x".into()));
        let internal = AppError::Service(ServiceError::Internal("x".into()));

        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn gate_rejection_is_a_client_error() {
        let err = AppError::Auth("Falta token".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Falta token");
    }
}
