use thiserror::Error;

/// Domain-level failures from design operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DesignError {
    #[error("Design not found: {0}")]
    NotFound(String),

    #[error("Design ID mismatch: path '{path}' does not match body '{body}'")]
    IdMismatch { path: String, body: String },

    #[error("{0} is not implemented yet")]
    Unimplemented(&'static str),
}

pub type DesignResult<T> = Result<T, DesignError>;
