//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application error type
///
/// The API contract collapses every domain failure into a 400 response whose
/// body is the error's message as plain text. The taxonomy is still kept
/// distinct here so services and handlers can map precisely.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BusinessRule(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Authentication(String),

    /// Programming-contract violation (e.g. update without an id). Not a
    /// business error, but it surfaces through the same broad 400 mapping.
    #[error("{0}")]
    Precondition(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Validation(msg)
            | AppError::BusinessRule(msg)
            | AppError::NotFound(msg)
            | AppError::Authentication(msg)
            | AppError::Precondition(msg) => msg.clone(),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                self.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                self.to_string()
            }
        };

        (StatusCode::BAD_REQUEST, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;

    async fn body_of(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
    }

    #[tokio::test]
    async fn validation_error_maps_to_400_with_plain_message() {
        let response = AppError::Validation("invalid month".into()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, "invalid month");
    }

    #[tokio::test]
    async fn not_found_and_auth_errors_share_the_400_channel() {
        for error in [
            AppError::NotFound("entry not found for given id".into()),
            AppError::Authentication("invalid password".into()),
            AppError::BusinessRule("a user is already registered with this email".into()),
            AppError::Precondition("entry id is required".into()),
        ] {
            let expected = error.to_string();
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_of(response).await, expected);
        }
    }

    #[tokio::test]
    async fn internal_error_keeps_its_message_in_the_body() {
        let response = AppError::Internal("pool exhausted".into()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, "internal error: pool exhausted");
    }
}
