//! Security primitives and memory safety utilities
//!
//! Foundational types for holding private scalars and intermediate secret
//! values so that they are wiped, not merely deallocated.

pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{SecretBuffer, ZeroizeGuard};

// Re-export memory barrier utilities
pub use memory::barrier;
