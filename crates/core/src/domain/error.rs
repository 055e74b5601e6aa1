// Domain Error Types

use super::token::TokenNumber;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Holder name must not be empty")]
    InvalidName,

    #[error("No tokens waiting in the queue")]
    QueueEmpty,

    #[error("Token not found: {0}")]
    NotFound(TokenNumber),
}

pub type Result<T> = std::result::Result<T, DomainError>;
