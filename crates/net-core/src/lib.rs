//! Netswitch Core
//!
//! Shared types, defaults and the error taxonomy used by every netswitch crate

pub mod error;
pub mod types;

pub use error::NetworkError;
pub use types::*;

/// Result type for netswitch operations
pub type Result<T> = std::result::Result<T, NetworkError>;
