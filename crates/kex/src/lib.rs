//! Elliptic-curve Diffie-Hellman key exchange
//!
//! This crate provides the key-exchange objects a transport handshake
//! negotiates between: each one owns a private scalar, publishes the
//! matching public value, and derives a shared secret from the peer's
//! public value after validating it.

pub mod error;
pub mod p256;

// Re-exports
pub use p256::{
    P256KeyExchange, P256KeyExchangeFactory, P256_KEY_EXCHANGE_FACTORY, P256_TAG,
};
