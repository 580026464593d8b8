//! Shared error types for the capture readiness workflow

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid readiness flag: {field} = {value:?}")]
    InvalidFlag { field: String, value: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
