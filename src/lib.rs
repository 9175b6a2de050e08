//! # dkex
//!
//! Elliptic-curve Diffie-Hellman key exchange for secure-transport
//! handshakes.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dkex = "0.3"
//! ```
//!
//! ```
//! use dkex::prelude::*;
//!
//! let alice = P256_KEY_EXCHANGE_FACTORY.create().unwrap();
//! let bob = P256_KEY_EXCHANGE_FACTORY.create().unwrap();
//!
//! let a = alice.calculate_shared_key(bob.public_value()).unwrap();
//! let b = bob.calculate_shared_key(alice.public_value()).unwrap();
//! assert_eq!(a, b);
//! ```
//!
//! ## Features
//!
//! - `kex` (default): the P-256 key exchange
//! - `algorithms`: the curve backend on its own
//! - `serde`: serialization of key-exchange tags
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`dkex-api`]: key-exchange traits, error type and secret containers
//! - [`dkex-algorithms`]: the P-256 group backend
//! - [`dkex-kex`]: `P256KeyExchange` and its factory

// Core re-exports (always available)
pub use dkex_api as api;
pub use dkex_common as common;
pub use dkex_internal as internal;
pub use dkex_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use dkex_algorithms as algorithms;

#[cfg(feature = "kex")]
pub use dkex_kex as kex;

// Third-party crates that appear in the public API
#[cfg(feature = "kex")]
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for dkex users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KeyExchange, KeyExchangeFactory, SharedKeyCallback};

    // Re-export secret containers
    pub use crate::api::{KeyExchangeTag, PrivateKey, SecretVec, SharedKey};
    pub use crate::common::{SecretBuffer, ZeroizeGuard};

    #[cfg(feature = "kex")]
    pub use crate::kex::{
        P256KeyExchange, P256KeyExchangeFactory, P256_KEY_EXCHANGE_FACTORY, P256_TAG,
    };
}
