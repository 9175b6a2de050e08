//! P-256 points and their SEC1 uncompressed encoding

use crate::ec::p256::constants::{
    P256_FIELD_ELEMENT_SIZE, P256_POINT_UNCOMPRESSED_SIZE, UNCOMPRESSED_POINT_TAG,
};
use crate::ec::p256::scalar::Scalar;
use crate::error::{validate, Error, Result};
use dkex_common::security::{barrier, SecretBuffer};
use dkex_params::traditional::ecdh::NIST_P256;
use p256::elliptic_curve::group::Group;
use p256::elliptic_curve::point::AffineCoordinates;
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{AffinePoint, EncodedPoint, ProjectivePoint};
use zeroize::Zeroize;

/// A validated P-256 point
///
/// Never the point at infinity: every constructor rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point(AffinePoint);

impl Point {
    /// Parse an uncompressed SEC1 encoding `0x04 || x || y`
    ///
    /// Checks, in order: total length, leading tag, each coordinate below
    /// the field prime p, and the curve equation.
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "P-256 uncompressed point",
            bytes.len(),
            P256_POINT_UNCOMPRESSED_SIZE,
        )?;
        validate::encoding(
            bytes[0] == UNCOMPRESSED_POINT_TAG,
            "P-256 uncompressed point",
            "leading byte is not the uncompressed tag",
        )?;

        let (x, y) = bytes[1..].split_at(P256_FIELD_ELEMENT_SIZE);
        validate::encoding(
            is_below_prime(x),
            "P-256 uncompressed point",
            "x-coordinate is not below the field prime",
        )?;
        validate::encoding(
            is_below_prime(y),
            "P-256 uncompressed point",
            "y-coordinate is not below the field prime",
        )?;

        let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| Error::InvalidEncoding {
            context: "P-256 uncompressed point",
            reason: "malformed SEC1 encoding",
        })?;
        let affine: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
        let affine = affine.ok_or(Error::InvalidEncoding {
            context: "P-256 uncompressed point",
            reason: "point is not on the curve",
        })?;

        Self::from_affine(affine, "P-256 uncompressed point")
    }

    /// Serialize as `0x04 || x || y`
    pub fn serialize_uncompressed(&self) -> [u8; P256_POINT_UNCOMPRESSED_SIZE] {
        let encoded = self.0.to_encoded_point(false);
        let mut out = [0u8; P256_POINT_UNCOMPRESSED_SIZE];
        out.copy_from_slice(encoded.as_bytes());
        out
    }

    /// Big-endian x-coordinate in zeroizing storage
    pub fn x_coordinate(&self) -> SecretBuffer<P256_FIELD_ELEMENT_SIZE> {
        let mut x: [u8; P256_FIELD_ELEMENT_SIZE] = self.0.x().into();
        let out = SecretBuffer::new(x);
        x.zeroize();
        out
    }

    /// Compute `scalar * self` in constant time
    ///
    /// Fails with [`Error::IdentityPoint`] if the product is the point at
    /// infinity, which cannot happen for a prime-order group and a scalar in
    /// [1, n-1] but is checked regardless.
    pub fn mul(&self, scalar: &Scalar) -> Result<Self> {
        let k = scalar.to_nonzero()?;
        let product = barrier::with_barriers(|| ProjectivePoint::from(self.0) * *k);
        Self::from_projective(product, "P-256 scalar multiplication")
    }

    /// Compute `scalar * G` in constant time
    pub fn mul_base(scalar: &Scalar) -> Result<Self> {
        let k = scalar.to_nonzero()?;
        let product = barrier::with_barriers(|| ProjectivePoint::generator() * *k);
        Self::from_projective(product, "P-256 base point multiplication")
    }

    fn from_projective(point: ProjectivePoint, context: &'static str) -> Result<Self> {
        if bool::from(point.is_identity()) {
            return Err(Error::IdentityPoint { context });
        }
        Ok(Point(point.to_affine()))
    }

    fn from_affine(point: AffinePoint, context: &'static str) -> Result<Self> {
        if bool::from(ProjectivePoint::from(point).is_identity()) {
            return Err(Error::IdentityPoint { context });
        }
        Ok(Point(point))
    }
}

/// Big-endian comparison of a public coordinate against p
fn is_below_prime(coordinate: &[u8]) -> bool {
    for (a, b) in coordinate.iter().zip(NIST_P256.p.iter()) {
        if a != b {
            return a < b;
        }
    }
    false
}
