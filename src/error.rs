//! Error types for prezi operations.

use thiserror::Error;

/// Errors that can occur while loading inputs or assembling documents.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record has no title: {0}")]
    MissingTitle(String),

    #[error("Invalid page number: {0}")]
    InvalidPage(usize),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid image size: {0}")]
    InvalidSize(String),
}

pub type Result<T> = std::result::Result<T, Error>;
