use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio::{MetaError, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not found")]
    NotFound,

    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Metadata error: {0}")]
    Meta(MetaError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::NotFound | ServerError::ArticleNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Forbidden => StatusCode::FORBIDDEN,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Meta(MetaError::Parse { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::Meta(MetaError::Store(_))
            | ServerError::Internal(_)
            | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::NotFound => "NOT_FOUND",
            ServerError::ArticleNotFound(_) => "ARTICLE_NOT_FOUND",
            ServerError::Forbidden => "FORBIDDEN",
            ServerError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Meta(MetaError::Parse { .. }) => "MALFORMED_ARTICLE",
            ServerError::Meta(MetaError::Store(_)) => "STORE_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(name) => ServerError::ArticleNotFound(name),
            StoreError::InvalidName(name) => {
                ServerError::BadRequest(format!("invalid article name {name:?}"))
            }
            StoreError::Io(err) => ServerError::Internal(format!("IO error: {err}")),
        }
    }
}

impl From<MetaError> for ServerError {
    fn from(err: MetaError) -> Self {
        match err {
            MetaError::Store(err) => err.into(),
            other => ServerError::Meta(other),
        }
    }
}

impl From<tokio::task::JoinError> for ServerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ServerError::Internal(format!("blocking task failed: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::ParseError;

    #[test]
    fn store_errors_map_to_client_statuses() {
        let not_found: ServerError = StoreError::NotFound("x".into()).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let invalid: ServerError = StoreError::InvalidName("../x".into()).into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_article_is_unprocessable() {
        let err: ServerError = MetaError::Parse {
            name: "bad".into(),
            source: ParseError::MissingTitle,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error_code(), "MALFORMED_ARTICLE");
    }

    #[test]
    fn auth_and_method_statuses() {
        assert_eq!(ServerError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ServerError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
