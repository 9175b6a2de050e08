//! Error handling for key-exchange operations
//!
//! Curve backends report what went wrong at the group level. This module
//! records which key-exchange step observed the failure, and that step
//! decides the public error category.

use dkex_algorithms::error::Error as PrimitiveError;
use dkex_api::Error as CoreError;

/// Error type for key-exchange operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Drawing a fresh private key failed
    #[error("key generation failed in {context}: {source}")]
    KeyGeneration {
        context: &'static str,
        source: PrimitiveError,
    },

    /// Stored or supplied private key bytes were rejected
    #[error("private key rejected in {context}: {source}")]
    PrivateKey {
        context: &'static str,
        source: PrimitiveError,
    },

    /// The peer's public value failed validation
    #[error("peer public value rejected in {context}: {source}")]
    PeerPublicValue {
        context: &'static str,
        source: PrimitiveError,
    },

    /// Scalar multiplication with a validated peer point failed
    #[error("shared point computation failed in {context}: {source}")]
    SharedPoint {
        context: &'static str,
        source: PrimitiveError,
    },
}

/// Result type for key-exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::KeyGeneration { context, source } => match source {
                PrimitiveError::RandomSource { reason, .. } => {
                    CoreError::KeyGenerationUnavailable { context, reason }
                }
                other => CoreError::Other {
                    context,
                    message: other.to_string(),
                },
            },
            Error::PrivateKey { context, source } => CoreError::InvalidPrivateKey {
                context,
                reason: match source {
                    PrimitiveError::Length { .. } => "private key has the wrong length",
                    PrimitiveError::InvalidScalar { reason, .. } => reason,
                    _ => "private key does not produce a valid public value",
                },
            },
            Error::PeerPublicValue { context, source } => CoreError::InvalidPeerPublicValue {
                context,
                reason: match source {
                    PrimitiveError::Length { .. } => "public value has the wrong length",
                    PrimitiveError::InvalidEncoding { reason, .. } => reason,
                    PrimitiveError::IdentityPoint { .. } => "public value is the point at infinity",
                    _ => "public value could not be decoded",
                },
            },
            Error::SharedPoint { context, source } => match source {
                PrimitiveError::IdentityPoint { .. } => CoreError::DegenerateSharedPoint { context },
                other => CoreError::Other {
                    context,
                    message: other.to_string(),
                },
            },
        }
    }
}

// Re-export core error handling traits
pub use dkex_api::error::ResultExt;
