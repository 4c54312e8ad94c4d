use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    SourceError(reqwest::Error),
    AuthError(String),
    MalformedRow(String),
    MalformedSheet(String),
    ConfigError(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::SourceError(e) => write!(f, "Spreadsheet request failed: {}", e),
            AppError::AuthError(msg) => write!(f, "Authentication failed: {}", msg),
            AppError::MalformedRow(msg) => write!(f, "Malformed row: {}", msg),
            AppError::MalformedSheet(msg) => write!(f, "Malformed sheet: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::SourceError(err)
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::AuthError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::SourceError(ref e) => {
                tracing::error!("Spreadsheet error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Product source unavailable")
            }
            AppError::AuthError(ref msg) => {
                tracing::error!("Authentication error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Product source unavailable")
            }
            AppError::MalformedRow(ref msg) => {
                tracing::error!("Malformed row: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::MalformedSheet(ref msg) => {
                tracing::error!("Malformed sheet: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error",
                )
            }
            AppError::InternalError(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_row_renders_generic_server_error() {
        let response = AppError::MalformedRow("missing field `price`".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_names_the_error_kind() {
        let err = AppError::MalformedRow("missing field `id`".to_string());

        assert_eq!(err.to_string(), "Malformed row: missing field `id`");
    }
}
