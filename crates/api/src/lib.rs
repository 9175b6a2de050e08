//! Public API traits and types for the dkex library
//!
//! This crate provides the public API surface for the dkex ecosystem: the
//! object-safe key-exchange traits a handshake dispatches through, the
//! error type every operation reports, and zeroizing containers for the
//! secret bytes that cross the API boundary.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{KeyExchange, KeyExchangeFactory, SharedKeyCallback};

// Re-export trait modules for direct access
pub use traits::key_exchange;
