//! Core types with security guarantees for the dkex library
//!
//! This module provides the byte containers that carry secret material
//! across the API boundary and the tag that identifies a key-exchange
//! family.

use core::fmt;
use core::ops::Deref;
use dkex_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A variable-length vector of bytes that is securely zeroed when dropped
///
/// This type provides:
/// - Secure zeroing when dropped
/// - Constant-time equality comparison
/// - Debug implementation that hides the actual bytes
///
/// There is deliberately no `DerefMut`: secret outputs are read-only once
/// produced.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

/// Shared secret produced by a key exchange
pub type SharedKey = SecretVec;

/// Serialized private key handed out by a key-exchange factory
pub type PrivateKey = SecretVec;

impl SecretVec {
    /// Create a new instance from an existing vector
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create by copying from a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for SecretVec {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl PartialEq for SecretVec {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for SecretVec {}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec({})[REDACTED]", self.data.len())
    }
}

/// Identifier of a key-exchange family
///
/// Four ASCII bytes packed little-endian into a `u32`, the convention QUIC
/// crypto handshakes use for their tags: the tag for `"P256"` has `'P'` in
/// its least significant byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KeyExchangeTag(u32);

impl KeyExchangeTag {
    /// Build a tag from its four ASCII bytes
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    /// Build a tag from its packed numeric value
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    /// The packed numeric value
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// The four tag bytes in wire order
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for KeyExchangeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        if bytes.iter().all(|b| b.is_ascii_graphic()) {
            for &b in &bytes {
                write!(f, "{}", b as char)?;
            }
            Ok(())
        } else {
            write!(f, "0x{:08x}", self.0)
        }
    }
}

impl fmt::Debug for KeyExchangeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyExchangeTag({})", self)
    }
}
