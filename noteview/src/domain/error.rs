// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Note title cannot be empty")]
    EmptyTitle,
    #[error("Version {version_id} not found for note {note_id}")]
    VersionNotFound { note_id: String, version_id: String },
    #[error("No history recorded for note: {0}")]
    HistoryNotFound(String),
    #[error("Authentication required to access {0}")]
    Unauthenticated(String),
    #[error("Unknown sort mode: {0}")]
    InvalidSortMode(String),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
