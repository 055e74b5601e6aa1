// Bank Queue Core - Domain Logic & Use Cases
// NO terminal I/O here; the presentation layer lives in the cli crate

pub mod application;
pub mod domain;
pub mod error;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
