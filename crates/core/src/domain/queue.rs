// Queue Domain Model
//
// FIFO of pending tokens plus the issuance/service counters.
// Lookups and removals are linear scans; a single teller line stays small.

use super::error::{DomainError, Result};
use super::token::{HolderName, Token, TokenNumber};
use serde::Serialize;
use std::collections::VecDeque;

/// Outcome of removing a token by number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    NotFound,
}

/// Read-only view of the queue for status display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot {
    pub size: usize,
    pub is_empty: bool,
    pub ordered_numbers: Vec<TokenNumber>,
    pub last_served: TokenNumber,
    pub last_issued: TokenNumber,
}

impl QueueSnapshot {
    /// Number shown as "now serving" / "next token to serve"
    pub fn now_serving(&self) -> TokenNumber {
        self.last_served + 1
    }
}

/// Owns the pending tokens and both counters
#[derive(Debug, Default)]
pub struct QueueManager {
    pending: VecDeque<Token>,
    last_issued: TokenNumber,
    last_served: TokenNumber,
}

impl QueueManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the next token and append it to the back of the line
    pub fn issue(&mut self, holder_name: HolderName) -> Token {
        self.last_issued += 1;
        let token = Token::new(self.last_issued, holder_name);
        self.pending.push_back(token.clone());
        token
    }

    /// Remove and return the front token
    pub fn serve_next(&mut self) -> Result<Token> {
        let token = self.pending.pop_front().ok_or(DomainError::QueueEmpty)?;
        self.last_served = token.number();
        Ok(token)
    }

    /// 1-based distance from the front, or NotFound if the number is not pending
    pub fn position_of(&self, number: TokenNumber) -> Result<usize> {
        self.pending
            .iter()
            .position(|t| t.number() == number)
            .map(|idx| idx + 1)
            .ok_or(DomainError::NotFound(number))
    }

    /// Remove the pending token with this number, keeping the rest in order.
    /// Counters are left untouched.
    pub fn delete_token(&mut self, number: TokenNumber) -> Removal {
        match self.pending.iter().position(|t| t.number() == number) {
            Some(idx) => {
                self.pending.remove(idx);
                Removal::Removed
            }
            None => Removal::NotFound,
        }
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            size: self.pending.len(),
            is_empty: self.pending.is_empty(),
            ordered_numbers: self.pending.iter().map(Token::number).collect(),
            last_served: self.last_served,
            last_issued: self.last_issued,
        }
    }

    /// Pending tokens, front to back
    pub fn pending(&self) -> impl Iterator<Item = &Token> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn last_issued(&self) -> TokenNumber {
        self.last_issued
    }

    pub fn last_served(&self) -> TokenNumber {
        self.last_served
    }
}
