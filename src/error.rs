//! Unified error types for the token service.
//! Used by: config, token, handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JWT_KEY is not set; refusing to start with a forgeable signing key")]
    MissingKey,

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("token encoding failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::MissingKey | Error::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_returns_400() {
        let response = Error::Validation("bad".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_key_returns_500() {
        let response = Error::MissingKey.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            Error::Validation("email is empty".into()).to_string(),
            "invalid request: email is empty"
        );
        assert!(Error::MissingKey.to_string().contains("JWT_KEY"));
    }
}
