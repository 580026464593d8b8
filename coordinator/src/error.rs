//! Coordinator-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoordinatorError {
    #[error("Configuration error: {field}")]
    Configuration { field: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Token exchange failed: {message}")]
    TokenExchange { message: String },

    #[error("Spreadsheet '{name}' not found")]
    SheetNotFound { name: String },

    #[error("Spreadsheet API returned status {status}")]
    SheetStatus { status: u16 },

    #[error("Capture service returned status {status}")]
    BackendStatus { status: u16 },

    #[error("Capture service returned no record matching the readiness filter")]
    NoMatchingRecord,

    #[error("Roster row has {columns} columns, expected at least {expected}")]
    RowTooShort { columns: usize, expected: usize },

    #[error("Display surface error: {message}")]
    Display { message: String },

    #[error("Shared component error")]
    Shared(#[from] SharedError),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CoordinatorResult<T> = Result<T, CoordinatorError>;
