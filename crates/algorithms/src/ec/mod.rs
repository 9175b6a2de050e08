// File: crates/algorithms/src/ec/mod.rs
//! Elliptic Curve Primitives
//!
//! This module defines the group capability a Diffie-Hellman key exchange
//! needs from a curve backend, and provides the NIST P-256 backend.

use crate::error::Result;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

pub mod p256;

pub use self::p256::{Point as P256Point, Scalar as P256Scalar, P256};

/// Prime-order group operations required for Diffie-Hellman
///
/// Implementors are zero-sized markers; every operation is an associated
/// function. All scalar handling must be constant time, and
/// [`decode_uncompressed`](Self::decode_uncompressed) must reject anything
/// that is not a valid non-identity group element.
pub trait EllipticCurveGroup: Send + Sync + 'static {
    /// Private scalar in [1, n-1], wiped on drop
    type Scalar: Zeroize + Send + Sync;

    /// Validated, non-identity group element
    type Point: Clone + Send + Sync;

    /// Serialized uncompressed point
    type EncodedPoint: AsRef<[u8]> + Clone + Send + Sync;

    /// Raw Diffie-Hellman output
    type SharedSecret: AsRef<[u8]> + Zeroize;

    /// Human readable group name
    const NAME: &'static str;

    /// Size of a serialized scalar in bytes
    const SCALAR_SIZE: usize;

    /// Size of an uncompressed point encoding in bytes
    const ENCODED_POINT_SIZE: usize;

    /// Draw a uniformly random scalar in [1, n-1]
    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self::Scalar>;

    /// Decode a big-endian scalar, rejecting zero and values >= n
    fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar>;

    /// Big-endian encoding of a scalar
    fn scalar_to_bytes(scalar: &Self::Scalar) -> Zeroizing<Vec<u8>>;

    /// Compute `scalar * G`
    fn mul_base(scalar: &Self::Scalar) -> Result<Self::Point>;

    /// Serialize a point as `0x04 || x || y`
    fn encode_uncompressed(point: &Self::Point) -> Self::EncodedPoint;

    /// Parse and fully validate an uncompressed point
    fn decode_uncompressed(bytes: &[u8]) -> Result<Self::Point>;

    /// Compute `scalar * point`, failing if the result is the identity
    fn scalar_mul(scalar: &Self::Scalar, point: &Self::Point) -> Result<Self::Point>;

    /// Big-endian x-coordinate of a point
    fn x_coordinate(point: &Self::Point) -> Self::SharedSecret;
}
