// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// True when the error is the soft "nothing to serve" signal
    pub fn is_queue_empty(&self) -> bool {
        matches!(self, AppError::Domain(crate::domain::DomainError::QueueEmpty))
    }

    /// True when the caller supplied an empty holder name
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, AppError::Domain(crate::domain::DomainError::InvalidName))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
