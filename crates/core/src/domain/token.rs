// Token Domain Model

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Token number (1, 2, 3, ... in issuance order)
pub type TokenNumber = i64;

/// Customer name attached to a token, guaranteed non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HolderName(String);

impl HolderName {
    /// Trim surrounding whitespace and reject an empty result
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HolderName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HolderName> for String {
    fn from(name: HolderName) -> Self {
        name.0
    }
}

impl std::fmt::Display for HolderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A customer's place in line. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    number: TokenNumber,
    holder_name: HolderName,
}

impl Token {
    pub(crate) fn new(number: TokenNumber, holder_name: HolderName) -> Self {
        Self {
            number,
            holder_name,
        }
    }

    pub fn number(&self) -> TokenNumber {
        self.number
    }

    pub fn holder_name(&self) -> &HolderName {
        &self.holder_name
    }
}
