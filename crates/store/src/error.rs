use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the article store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("article not found: {0}")]
    NotFound(String),
    #[error("invalid article name: {0:?}")]
    InvalidName(String),
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
}
