//! Error types for Filekit

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilekitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid number format: {token}")]
    InvalidNumber { token: String },

    #[error("Array is empty")]
    EmptyInput,

    #[error("Cannot take the maximum of an empty sequence")]
    EmptySequence,

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

pub type Result<T> = std::result::Result<T, FilekitError>;
