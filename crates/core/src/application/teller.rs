// Teller Service - use cases shared by the customer and staff menus

use crate::domain::{HolderName, QueueManager, QueueSnapshot, Removal, Token, TokenNumber};
use crate::error::Result;
use tracing::{debug, info};

/// Answer to "where am I in line?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionLookup {
    /// Number is at or below the last served token; the queue is not searched
    AlreadyServed,
    /// Not pending (deleted, or never issued)
    NotInQueue,
    Waiting { position: usize, ahead: usize },
}

/// Answer to a staff delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Number is at or below the last served token; nothing was attempted
    Refused,
    Removed,
    NotFound,
}

/// Owns the queue for one session and applies the caller-side checks
#[derive(Debug, Default)]
pub struct TellerService {
    queue: QueueManager,
}

impl TellerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token for a raw, user-entered name
    pub fn issue(&mut self, raw_name: &str) -> Result<Token> {
        let holder = HolderName::parse(raw_name)?;
        let token = self.queue.issue(holder);
        info!(token = token.number(), waiting = self.queue.len(), "token issued");
        Ok(token)
    }

    /// Serve the front token
    pub fn serve_next(&mut self) -> Result<Token> {
        let token = self.queue.serve_next()?;
        info!(token = token.number(), waiting = self.queue.len(), "token served");
        Ok(token)
    }

    pub fn check_position(&self, number: TokenNumber) -> PositionLookup {
        if number <= self.queue.last_served() {
            debug!(token = number, "position lookup for served token");
            return PositionLookup::AlreadyServed;
        }

        match self.queue.position_of(number) {
            Ok(position) => PositionLookup::Waiting {
                position,
                ahead: position - 1,
            },
            Err(_) => PositionLookup::NotInQueue,
        }
    }

    pub fn delete(&mut self, number: TokenNumber) -> DeleteOutcome {
        if number <= self.queue.last_served() {
            debug!(token = number, "delete refused");
            return DeleteOutcome::Refused;
        }

        match self.queue.delete_token(number) {
            Removal::Removed => {
                info!(token = number, waiting = self.queue.len(), "token deleted");
                DeleteOutcome::Removed
            }
            Removal::NotFound => DeleteOutcome::NotFound,
        }
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        self.queue.snapshot()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Token> {
        self.queue.pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::AppError;

    #[test]
    fn test_issue_rejects_blank_name() {
        let mut service = TellerService::new();

        let err = service.issue("   ").unwrap_err();
        assert!(err.is_invalid_name());
        assert_eq!(service.snapshot().last_issued, 0);
    }

    #[test]
    fn test_issue_trims_name() {
        let mut service = TellerService::new();

        let token = service.issue(" Alice ").unwrap();
        assert_eq!(token.number(), 1);
        assert_eq!(token.holder_name().as_str(), "Alice");
    }

    #[test]
    fn test_serve_next_empty_is_soft_error() {
        let mut service = TellerService::new();

        let err = service.serve_next().unwrap_err();
        assert!(err.is_queue_empty());
        assert!(matches!(err, AppError::Domain(DomainError::QueueEmpty)));
    }

    #[test]
    fn test_check_position() {
        let mut service = TellerService::new();
        service.issue("A").unwrap();
        service.issue("B").unwrap();
        service.issue("C").unwrap();
        service.serve_next().unwrap();

        assert_eq!(service.check_position(1), PositionLookup::AlreadyServed);
        assert_eq!(service.check_position(0), PositionLookup::AlreadyServed);
        assert_eq!(service.check_position(-5), PositionLookup::AlreadyServed);
        assert_eq!(
            service.check_position(3),
            PositionLookup::Waiting {
                position: 2,
                ahead: 1
            }
        );
        assert_eq!(service.check_position(9), PositionLookup::NotInQueue);
    }

    #[test]
    fn test_delete_refuses_served_numbers() {
        let mut service = TellerService::new();
        service.issue("A").unwrap();
        service.issue("B").unwrap();
        service.serve_next().unwrap();

        assert_eq!(service.delete(1), DeleteOutcome::Refused);
        assert_eq!(service.delete(2), DeleteOutcome::Removed);
        assert_eq!(service.delete(2), DeleteOutcome::NotFound);
        assert!(service.snapshot().is_empty);
    }

    #[test]
    fn test_deleted_token_below_front_stays_unreachable() {
        let mut service = TellerService::new();
        service.issue("A").unwrap();
        service.issue("B").unwrap();
        service.issue("C").unwrap();

        assert_eq!(service.delete(1), DeleteOutcome::Removed);
        assert_eq!(service.check_position(1), PositionLookup::NotInQueue);
        assert_eq!(service.snapshot().last_served, 0);
    }
}
