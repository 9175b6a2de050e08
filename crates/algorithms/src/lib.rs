//! Elliptic-curve group backends with constant-time arithmetic
//!
//! This crate exposes the [`ec::EllipticCurveGroup`] capability that
//! key-exchange objects are written against, and the NIST P-256 backend
//! that implements it.
//!
//! # Security Features
//!
//! - Private scalars live in zeroize-on-drop storage
//! - Scalar multiplication runs in constant time
//! - Peer-supplied points are fully validated before use

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{p256, EllipticCurveGroup, P256Point, P256Scalar, P256};

// Re-export security types from dkex-common
pub use dkex_common::security::{barrier, SecretBuffer, ZeroizeGuard};
