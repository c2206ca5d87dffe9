//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use suvadi_content::ContentError;
use suvadi_storage::StorageError;
use suvadi_tree::TreeError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Document not found at the given path.
    #[error("Content not found: {0}")]
    ContentNotFound(String),

    /// Tree construction failure.
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    /// Storage failure while reading a matched file.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ServerError {
    /// Map a resolution error, keeping the request path for the 404 body.
    pub(crate) fn from_content_error(err: ContentError, path: &str) -> Self {
        match err {
            ContentError::NotFound { .. } => Self::ContentNotFound(path.to_owned()),
            ContentError::Storage(e) => Self::Storage(e),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::ContentNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Content not found", "path": path}),
            ),
            Self::Tree(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
            Self::Storage(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ServerError::ContentNotFound("guide/missing".to_owned());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_content_error_mapping() {
        let err = ContentError::NotFound {
            base: "guide/missing".into(),
            language: suvadi_content::Language::Ta,
        };
        let mapped = ServerError::from_content_error(err, "guide/missing");
        assert!(matches!(mapped, ServerError::ContentNotFound(_)));
    }
}
