// File: crates/kex/src/p256/mod.rs
//! ECDH key exchange over NIST P-256
//!
//! A [`P256KeyExchange`] owns one private scalar in [1, n-1] and the
//! matching public value, serialized once at construction as the 65-byte
//! uncompressed point `0x04 || x || y`. The shared key is the 32-byte
//! big-endian x-coordinate of `private * peer`; no KDF is applied at this
//! layer.
//!
//! # Security Features
//!
//! - Private scalars are zeroized on drop
//! - Constant-time scalar multiplication
//! - Full validation of peer values (length, tag, field range, curve
//!   equation) before any secret-dependent computation
//! - A computation that collapses to the identity is an error, never an
//!   all-zero secret

use crate::error::{Error as KexError, ResultExt};
use core::fmt;
use core::marker::PhantomData;
use dkex_algorithms::ec::{EllipticCurveGroup, P256};
use dkex_algorithms::error::Error as PrimitiveError;
use dkex_api::{
    KeyExchange, KeyExchangeFactory, KeyExchangeTag, PrivateKey, Result as ApiResult, SharedKey,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace, warn};

/// Tag of the P-256 key exchange: `"P256"` packed little-endian
pub const P256_TAG: KeyExchangeTag = KeyExchangeTag::from_bytes(*b"P256");

/// ECDH key exchange with a P-256 private key
///
/// Generic over the group backend so alternative implementations can be
/// plugged in; the default is the constant-time [`P256`] backend, and only
/// that instantiation implements [`KeyExchange`].
pub struct P256KeyExchange<G: EllipticCurveGroup = P256> {
    private_key: G::Scalar,
    public_key: G::EncodedPoint,
    _group: PhantomData<G>,
}

impl P256KeyExchange {
    /// Generate a new P-256 private key using the operating system RNG
    ///
    /// The returned bytes always construct successfully through
    /// [`P256KeyExchange::new`].
    ///
    /// # Errors
    /// `Error::KeyGenerationUnavailable` if the random source fails.
    pub fn new_private_key() -> ApiResult<PrivateKey> {
        Self::new_private_key_with_rng(&mut OsRng)
    }

    /// Generate a new P-256 private key from the supplied RNG
    pub fn new_private_key_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> ApiResult<PrivateKey> {
        Self::generate_private_key(rng)
    }

    /// Construct a key exchange from a 32-byte big-endian private key
    ///
    /// # Errors
    /// `Error::InvalidPrivateKey` if the bytes are not exactly 32 bytes or
    /// the scalar is zero or not below the group order.
    pub fn new(private_key: &[u8]) -> ApiResult<Self> {
        Self::from_private_key(private_key)
    }
}

impl<G: EllipticCurveGroup> P256KeyExchange<G> {
    /// Draw a private key for backend `G`
    pub fn generate_private_key<R: RngCore + CryptoRng>(rng: &mut R) -> ApiResult<PrivateKey> {
        let scalar = G::random_scalar(rng).map_err(|source| {
            let err = KexError::KeyGeneration {
                context: "P256KeyExchange::new_private_key",
                source,
            };
            warn!(group = G::NAME, error = %err, "private key generation unavailable");
            err
        })?;

        Ok(PrivateKey::from_slice(&G::scalar_to_bytes(&scalar)))
    }

    /// Construct a key exchange for backend `G` from serialized private key bytes
    pub fn from_private_key(private_key: &[u8]) -> ApiResult<Self> {
        let context = "P256KeyExchange::new";
        let reject = |source: PrimitiveError| {
            let err = KexError::PrivateKey { context, source };
            debug!(
                group = G::NAME,
                len = private_key.len(),
                expected_len = G::SCALAR_SIZE,
                error = %err,
                "rejected private key"
            );
            err
        };

        let scalar = G::scalar_from_bytes(private_key).map_err(reject)?;
        let point = G::mul_base(&scalar).map_err(reject)?;
        let public_key = G::encode_uncompressed(&point);

        trace!(group = G::NAME, "constructed key exchange");
        Ok(Self {
            private_key: scalar,
            public_key,
            _group: PhantomData,
        })
    }

    /// Compute the shared key with the peer's serialized public value
    ///
    /// The peer value is decoded and fully validated before the private
    /// scalar is touched. Nothing is cached.
    ///
    /// # Errors
    /// `Error::InvalidPeerPublicValue` for a malformed or invalid peer value,
    /// `Error::DegenerateSharedPoint` if the product is the identity.
    pub fn calculate_shared_key(&self, peer_public_value: &[u8]) -> ApiResult<SharedKey> {
        let context = "P256KeyExchange::calculate_shared_key";

        let peer = G::decode_uncompressed(peer_public_value).map_err(|source| {
            let err = KexError::PeerPublicValue { context, source };
            debug!(
                group = G::NAME,
                len = peer_public_value.len(),
                expected_len = G::ENCODED_POINT_SIZE,
                error = %err,
                "rejected peer public value"
            );
            err
        })?;

        let shared = G::scalar_mul(&self.private_key, &peer).map_err(|source| {
            let err = KexError::SharedPoint { context, source };
            debug!(group = G::NAME, error = %err, "shared point computation failed");
            err
        })?;

        let x = G::x_coordinate(&shared);
        Ok(SharedKey::from_slice(x.as_ref()))
    }

    /// The serialized public value, computed once at construction
    pub fn public_value(&self) -> &[u8] {
        self.public_key.as_ref()
    }

    /// Export the private key in its 32-byte storage format
    ///
    /// Constructing a new object from the returned bytes yields the same
    /// public value.
    pub fn private_key(&self) -> PrivateKey {
        PrivateKey::from_slice(&G::scalar_to_bytes(&self.private_key))
    }
}

impl<G: EllipticCurveGroup> fmt::Debug for P256KeyExchange<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("P256KeyExchange")
            .field("group", &G::NAME)
            .field("private_key", &"[REDACTED]")
            .field("public_value_len", &self.public_key.as_ref().len())
            .finish()
    }
}

impl KeyExchange for P256KeyExchange {
    fn factory(&self) -> &'static dyn KeyExchangeFactory {
        &P256_KEY_EXCHANGE_FACTORY
    }

    fn calculate_shared_key(&self, peer_public_value: &[u8]) -> ApiResult<SharedKey> {
        P256KeyExchange::calculate_shared_key(self, peer_public_value)
    }

    fn public_value(&self) -> &[u8] {
        P256KeyExchange::public_value(self)
    }
}

/// Factory for [`P256KeyExchange`] objects
#[derive(Debug, Clone, Copy, Default)]
pub struct P256KeyExchangeFactory;

/// The process-wide P-256 key-exchange factory
pub static P256_KEY_EXCHANGE_FACTORY: P256KeyExchangeFactory = P256KeyExchangeFactory;

impl KeyExchangeFactory for P256KeyExchangeFactory {
    fn tag(&self) -> KeyExchangeTag {
        P256_TAG
    }

    fn name(&self) -> &'static str {
        P256::NAME
    }

    fn new_private_key(&self) -> ApiResult<PrivateKey> {
        P256KeyExchange::new_private_key().with_context("P256KeyExchangeFactory::new_private_key")
    }

    fn from_private_key(&self, private_key: &[u8]) -> ApiResult<Box<dyn KeyExchange>> {
        let kex = P256KeyExchange::new(private_key)
            .with_context("P256KeyExchangeFactory::from_private_key")?;
        Ok(Box::new(kex))
    }
}
