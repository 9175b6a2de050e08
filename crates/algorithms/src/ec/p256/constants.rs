//! Shared constants for P-256 operations

pub use dkex_params::traditional::ecdh::{
    P256_FIELD_ELEMENT_SIZE, P256_SCALAR_SIZE, UNCOMPRESSED_POINT_TAG,
};

/// Size of an uncompressed P-256 point in bytes: format byte (0x04) + x-coordinate + y-coordinate
pub const P256_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * P256_FIELD_ELEMENT_SIZE; // 65 bytes: 0x04 || x || y
