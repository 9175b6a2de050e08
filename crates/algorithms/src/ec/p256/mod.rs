//! NIST P-256 Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ - 3x + b over the prime field F_p where:
//! - p = 2^256 - 2^224 + 2^192 + 2^96 - 1 (NIST P-256 prime)
//! - The curve order n = 0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551
//!
//! Field and group arithmetic come from the RustCrypto `p256` crate, whose
//! scalar multiplication is constant time. This module adds strict scalar
//! and encoding validation on top and keeps private scalars in zeroizing
//! storage.

mod constants;
mod point;
mod scalar;

pub use constants::{
    P256_FIELD_ELEMENT_SIZE, P256_POINT_UNCOMPRESSED_SIZE, P256_SCALAR_SIZE,
    UNCOMPRESSED_POINT_TAG,
};
pub use point::Point;
pub use scalar::Scalar;

use crate::ec::EllipticCurveGroup;
use crate::error::Result;
use dkex_common::security::SecretBuffer;
use dkex_params::traditional::ecdh::NIST_P256;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Get the standard base point G of the P-256 curve
///
/// Decoded from the published domain parameters, so it passes through the
/// same validation as any peer point.
pub fn base_point_g() -> Result<Point> {
    let mut encoded = [0u8; P256_POINT_UNCOMPRESSED_SIZE];
    encoded[0] = UNCOMPRESSED_POINT_TAG;
    encoded[1..1 + P256_FIELD_ELEMENT_SIZE].copy_from_slice(&NIST_P256.g_x);
    encoded[1 + P256_FIELD_ELEMENT_SIZE..].copy_from_slice(&NIST_P256.g_y);
    Point::deserialize_uncompressed(&encoded)
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<Point> {
    Point::mul_base(scalar)
}

/// Generate a P-256 keypair
///
/// The private scalar is uniformly distributed in [1, n-1]; the public key
/// is `private_key * G`.
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let private_key = Scalar::random(rng)?;
    let public_key = scalar_mult_base_g(&private_key)?;
    Ok((private_key, public_key))
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Result<Point> {
    point.mul(scalar)
}

/// The NIST P-256 group backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct P256;

impl EllipticCurveGroup for P256 {
    type Scalar = Scalar;
    type Point = Point;
    type EncodedPoint = [u8; P256_POINT_UNCOMPRESSED_SIZE];
    type SharedSecret = SecretBuffer<P256_FIELD_ELEMENT_SIZE>;

    const NAME: &'static str = "P-256";
    const SCALAR_SIZE: usize = P256_SCALAR_SIZE;
    const ENCODED_POINT_SIZE: usize = P256_POINT_UNCOMPRESSED_SIZE;

    fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar> {
        Scalar::random(rng)
    }

    fn scalar_from_bytes(bytes: &[u8]) -> Result<Scalar> {
        Scalar::deserialize(bytes)
    }

    fn scalar_to_bytes(scalar: &Scalar) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(scalar.as_secret_buffer().as_slice().to_vec())
    }

    fn mul_base(scalar: &Scalar) -> Result<Point> {
        scalar_mult_base_g(scalar)
    }

    fn encode_uncompressed(point: &Point) -> [u8; P256_POINT_UNCOMPRESSED_SIZE] {
        point.serialize_uncompressed()
    }

    fn decode_uncompressed(bytes: &[u8]) -> Result<Point> {
        Point::deserialize_uncompressed(bytes)
    }

    fn scalar_mul(scalar: &Scalar, point: &Point) -> Result<Point> {
        scalar_mult(scalar, point)
    }

    fn x_coordinate(point: &Point) -> SecretBuffer<P256_FIELD_ELEMENT_SIZE> {
        point.x_coordinate()
    }
}
