//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::BankError;
use storage::repository::StorageError;

/// Errors emitted by `QuizSession` transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no question at index {index}")]
    NoQuestion { index: usize },
    #[error("question has not been loaded yet")]
    NotReady,
    #[error("session already completed")]
    Completed,
}

/// Errors emitted by `HighScoreService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HighScoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while loading a question bank file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankLoadError {
    #[error("failed to read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("question bank is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] BankError),
}
