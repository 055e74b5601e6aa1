// Domain Layer - Pure queue logic and entities

pub mod error;
pub mod queue;
pub mod token;

// Re-exports
pub use error::DomainError;
pub use queue::{QueueManager, QueueSnapshot, Removal};
pub use token::{HolderName, Token, TokenNumber};
