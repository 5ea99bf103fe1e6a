/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use deckhand_core::CoreError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(CoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => ServerError::Validation(msg),
            other => ServerError::Storage(other),
        }
    }
}

impl From<deckhand_storage::StorageError> for ServerError {
    fn from(err: deckhand_storage::StorageError) -> Self {
        ServerError::Storage(err.into())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            // Malformed bodies keep the 500 the HTTP contract has always returned
            ServerError::Validation(msg) => {
                tracing::warn!("Rejected request body: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ServerError::Storage(CoreError::Duplicate(ref what)) => {
                tracing::warn!("Duplicate entry: {}", what);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Username already exists".to_string(),
                )
            }
            ServerError::Storage(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_message() {
        let response = ServerError::NotFound("User not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "error": "User not found" }));
    }

    #[tokio::test]
    async fn storage_errors_are_redacted() {
        let err: ServerError =
            CoreError::Database("UNIQUE constraint failed: secret.table".to_string()).into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": "Database error" }));
    }

    #[test]
    fn core_errors_map_to_server_kinds() {
        assert!(matches!(
            ServerError::from(CoreError::Duplicate("username 'ash'".to_string())),
            ServerError::Storage(CoreError::Duplicate(_))
        ));
        assert!(matches!(
            ServerError::from(CoreError::invalid_input("title too long")),
            ServerError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn duplicate_maps_to_500_without_constraint_text() {
        let err: ServerError = CoreError::Duplicate("username 'ash'".to_string()).into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Username already exists" })
        );
    }
}
