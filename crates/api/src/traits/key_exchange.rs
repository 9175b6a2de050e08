// File: crates/api/src/traits/key_exchange.rs

//! Object-safe key-exchange interface
//!
//! A handshake negotiates a key-exchange method by tag, obtains the matching
//! [`KeyExchangeFactory`], and then works only with `dyn KeyExchange`
//! objects. Every trait here is object safe so the handshake never needs to
//! know which curve it is talking to.

use crate::types::{KeyExchangeTag, PrivateKey, SharedKey};
use crate::Result;

/// Completion handler for [`KeyExchange::calculate_shared_key_async`]
///
/// The handler is consumed when it runs, so it can only ever run once.
pub trait SharedKeyCallback: Send {
    /// Deliver the outcome of the shared-key computation
    fn run(self: Box<Self>, result: Result<SharedKey>);
}

impl<F> SharedKeyCallback for F
where
    F: FnOnce(Result<SharedKey>) + Send,
{
    fn run(self: Box<Self>, result: Result<SharedKey>) {
        (*self)(result)
    }
}

/// Produces key-exchange objects of one family
pub trait KeyExchangeFactory: Send + Sync {
    /// Tag identifying the key-exchange family on the wire
    fn tag(&self) -> KeyExchangeTag;

    /// Human readable name of the family
    fn name(&self) -> &'static str;

    /// Generate a fresh private key suitable for [`Self::from_private_key`]
    ///
    /// # Errors
    /// `Error::KeyGenerationUnavailable` when the secure random source fails.
    fn new_private_key(&self) -> Result<PrivateKey>;

    /// Build a key-exchange object from a stored private key
    ///
    /// # Errors
    /// `Error::InvalidPrivateKey` when the bytes are not a valid private key
    /// for this family. No object is produced in that case.
    fn from_private_key(&self, private_key: &[u8]) -> Result<Box<dyn KeyExchange>>;

    /// Build a key-exchange object with a freshly generated private key
    fn create(&self) -> Result<Box<dyn KeyExchange>> {
        let private_key = self.new_private_key()?;
        self.from_private_key(&private_key)
    }
}

/// One side of a Diffie-Hellman style key exchange
///
/// Implementations are immutable once constructed: the private key and the
/// derived public value never change, and no computation result is cached.
pub trait KeyExchange: Send + Sync {
    /// The factory that produced this object
    fn factory(&self) -> &'static dyn KeyExchangeFactory;

    /// Compute the shared key from the peer's serialized public value
    ///
    /// # Errors
    /// `Error::InvalidPeerPublicValue` if the peer value is malformed or not a
    /// valid group element, `Error::DegenerateSharedPoint` if the computation
    /// collapses to the identity. No partial secret is ever returned.
    fn calculate_shared_key(&self, peer_public_value: &[u8]) -> Result<SharedKey>;

    /// Compute the shared key and hand the outcome to `callback`
    ///
    /// The computation runs synchronously on the calling thread and the
    /// callback is invoked exactly once, before this method returns, with the
    /// same outcome [`Self::calculate_shared_key`] would produce. The callback
    /// must not call back into this object.
    fn calculate_shared_key_async(
        &self,
        peer_public_value: &[u8],
        callback: Box<dyn SharedKeyCallback>,
    ) {
        let result = self.calculate_shared_key(peer_public_value);
        callback.run(result);
    }

    /// The serialized public value to send to the peer
    fn public_value(&self) -> &[u8];
}
