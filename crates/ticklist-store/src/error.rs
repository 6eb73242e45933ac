use thiserror::Error;

/// Errors surfaced by the task store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("task '{0}' not found")]
    NotFound(String),

    #[error("task with ID '{0}' already exists")]
    Duplicate(String),

    #[error("invalid task: {0}")]
    Invalid(String),

    #[error("could not determine data directory")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, StoreError>;
