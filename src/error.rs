//! Error types for notekv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using NoteKvError
pub type Result<T> = std::result::Result<T, NoteKvError>;

/// Unified error type for notekv operations
#[derive(Debug, Error)]
pub enum NoteKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),
}

impl NoteKvError {
    /// True for the recoverable empty-input failure on create
    pub fn is_validation(&self) -> bool {
        matches!(self, NoteKvError::Validation(_))
    }
}
