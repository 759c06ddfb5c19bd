/// Error types for Sales Service
///
/// Client-facing failures render as `{"error": "..."}` JSON bodies.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Result type for sales-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// One of `days`, `columns` or `resources` is absent or empty
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("server start failure: {0}")]
    StartServer(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameters => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::StartServer(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed with internal error");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status).json(ErrorResponse { error: message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = resp.into_body().try_into_bytes().ok().expect("fixed body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[test]
    fn missing_parameters_renders_fixed_body() {
        let err = AppError::MissingParameters;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp),
            serde_json::json!({ "error": "Missing required parameters" })
        );
    }

    #[test]
    fn internal_errors_hide_details() {
        let resp = AppError::Config("SALES_SERVICE_PORT=abc".into()).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(resp),
            serde_json::json!({ "error": "Internal server error" })
        );
    }
}
