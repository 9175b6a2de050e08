//! Trait definitions for key-exchange operations

pub mod key_exchange;

pub use key_exchange::{KeyExchange, KeyExchangeFactory, SharedKeyCallback};
