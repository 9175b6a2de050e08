//! Common implementations and shared functionality for the dkex library
//!
//! This crate holds the scoped secret storage and memory-safety helpers the
//! curve backend and the key-exchange objects build on.

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, ZeroizeGuard};

// Re-export memory barrier utilities
pub use security::memory::barrier;
