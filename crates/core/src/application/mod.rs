// Application Layer - Teller use cases

pub mod teller;

// Re-exports
pub use teller::{DeleteOutcome, PositionLookup, TellerService};
