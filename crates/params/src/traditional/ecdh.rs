//! Constants for Elliptic Curve Diffie-Hellman over NIST P-256

/// Size of a P-256 field element in bytes
pub const P256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a P-256 scalar in bytes
pub const P256_SCALAR_SIZE: usize = 32;

/// Size of private key for ECDH using P-256 in bytes (big-endian scalar, no tag)
pub const ECDH_P256_PRIVATE_KEY_SIZE: usize = P256_SCALAR_SIZE;

/// Size of public key for ECDH using P-256 in bytes (uncompressed format)
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = 1 + 2 * P256_FIELD_ELEMENT_SIZE;

/// Size of shared secret for ECDH using P-256 in bytes (x-coordinate)
pub const ECDH_P256_SHARED_SECRET_SIZE: usize = P256_FIELD_ELEMENT_SIZE;

/// Leading byte of a SEC1 uncompressed point
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// Upper bound on rejection-sampling rounds when drawing a private scalar.
///
/// A uniformly random 256-bit candidate lands outside [1, n-1] with
/// probability below 2^-32, so exhausting this bound means the random
/// source is broken rather than unlucky.
pub const MAX_SCALAR_SAMPLING_ATTEMPTS: usize = 16;

/// Domain parameters of NIST P-256 (secp256r1), big-endian
#[derive(Debug, Clone, Copy)]
pub struct EcdhP256Params {
    /// Field prime p = 2^256 - 2^224 + 2^192 + 2^96 - 1
    pub p: [u8; 32],
    /// Group order n
    pub n: [u8; 32],
    /// x-coordinate of the generator G
    pub g_x: [u8; 32],
    /// y-coordinate of the generator G
    pub g_y: [u8; 32],
}

/// NIST P-256 domain parameters
pub const NIST_P256: EcdhP256Params = EcdhP256Params {
    p: [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF,
    ],
    n: [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84, 0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63,
        0x25, 0x51,
    ],
    g_x: [
        0x6B, 0x17, 0xD1, 0xF2, 0xE1, 0x2C, 0x42, 0x47, 0xF8, 0xBC, 0xE6, 0xE5, 0x63, 0xA4, 0x40,
        0xF2, 0x77, 0x03, 0x7D, 0x81, 0x2D, 0xEB, 0x33, 0xA0, 0xF4, 0xA1, 0x39, 0x45, 0xD8, 0x98,
        0xC2, 0x96,
    ],
    g_y: [
        0x4F, 0xE3, 0x42, 0xE2, 0xFE, 0x1A, 0x7F, 0x9B, 0x8E, 0xE7, 0xEB, 0x4A, 0x7C, 0x0F, 0x9E,
        0x16, 0x2B, 0xCE, 0x33, 0x57, 0x6B, 0x31, 0x5E, 0xCE, 0xCB, 0xB6, 0x40, 0x68, 0x37, 0xBF,
        0x51, 0xF5,
    ],
};
