//! P-256 scalar handling

use crate::ec::p256::constants::P256_SCALAR_SIZE;
use crate::error::{validate, Error, Result};
use dkex_common::security::{SecretBuffer, ZeroizeGuard};
use dkex_internal::constant_time::ct_is_zero;
use dkex_params::traditional::ecdh::MAX_SCALAR_SAMPLING_ATTEMPTS;
use p256::{FieldBytes, NonZeroScalar};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// P-256 scalar value for use in elliptic curve operations
///
/// Always in the range [1, n-1]. The big-endian bytes are kept in a
/// [`SecretBuffer`] and zeroized on drop; the arithmetic representation is
/// rebuilt for each multiplication and never stored.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<P256_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from a 32-byte big-endian array
    ///
    /// Rejects zero and any value not below the group order n. Unlike
    /// reduction, rejection keeps the mapping from stored bytes to scalar
    /// one-to-one.
    pub fn new(data: [u8; P256_SCALAR_SIZE]) -> Result<Self> {
        let scalar = Scalar(SecretBuffer::new(data));
        scalar.to_nonzero()?;
        Ok(scalar)
    }

    /// Deserialize a scalar from bytes with validation
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("P-256 scalar", bytes.len(), P256_SCALAR_SIZE)?;

        let mut buffer = SecretBuffer::<P256_SCALAR_SIZE>::zeroed();
        buffer.as_mut_slice().copy_from_slice(bytes);
        let scalar = Scalar(buffer);
        scalar.to_nonzero()?;
        Ok(scalar)
    }

    /// Draw a uniformly random scalar by rejection sampling
    ///
    /// At most `MAX_SCALAR_SAMPLING_ATTEMPTS` candidates are drawn. Rejected
    /// candidates are wiped before the next draw.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut candidate = [0u8; P256_SCALAR_SIZE];

        for _ in 0..MAX_SCALAR_SAMPLING_ATTEMPTS {
            let mut guard = ZeroizeGuard::new(&mut candidate);
            rng.try_fill_bytes(&mut guard[..])
                .map_err(|_| Error::RandomSource {
                    context: "P-256 scalar generation",
                    reason: "random source failed",
                })?;

            if let Ok(scalar) = Self::deserialize(&guard[..]) {
                return Ok(scalar);
            }
        }

        Err(Error::RandomSource {
            context: "P-256 scalar generation",
            reason: "rejection sampling exhausted its attempts",
        })
    }

    /// Access the underlying SecretBuffer containing the scalar value
    pub fn as_secret_buffer(&self) -> &SecretBuffer<P256_SCALAR_SIZE> {
        &self.0
    }

    /// Serialize the scalar to a big-endian byte array
    ///
    /// The caller owns the copy and is responsible for wiping it.
    pub fn serialize(&self) -> [u8; P256_SCALAR_SIZE] {
        let mut result = [0u8; P256_SCALAR_SIZE];
        result.copy_from_slice(self.0.as_ref());
        result
    }

    /// Arithmetic form of the scalar for the group backend
    pub(crate) fn to_nonzero(&self) -> Result<NonZeroScalar> {
        validate::scalar(
            !ct_is_zero(self.0.as_slice()),
            "P-256 scalar",
            "scalar is zero",
        )?;

        let repr = Zeroizing::new(self.serialize());
        let decoded: Option<NonZeroScalar> =
            NonZeroScalar::from_repr(FieldBytes::from(*repr)).into();

        decoded.ok_or(Error::InvalidScalar {
            context: "P-256 scalar",
            reason: "scalar is not below the group order",
        })
    }
}
