//! Error handling for curve primitives

use dkex_api::Error as CoreError;

/// The error type for curve primitives
///
/// These errors describe what went wrong at the group level. The
/// key-exchange layer decides which public error category they belong to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Length validation error
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Scalar outside [1, n-1]
    #[error("invalid scalar for {context}: {reason}")]
    InvalidScalar {
        /// Context where the scalar was rejected
        context: &'static str,
        /// Why the scalar was rejected
        reason: &'static str,
    },

    /// Point encoding that does not describe a valid curve point
    #[error("invalid point encoding for {context}: {reason}")]
    InvalidEncoding {
        /// Context where the encoding was rejected
        context: &'static str,
        /// Why the encoding was rejected
        reason: &'static str,
    },

    /// An operation produced the point at infinity
    #[error("{context} produced the point at infinity")]
    IdentityPoint {
        /// Operation that produced the identity
        context: &'static str,
    },

    /// The random source failed or could not produce a usable value
    #[error("random source unavailable in {context}: {reason}")]
    RandomSource {
        /// Context that requested randomness
        context: &'static str,
        /// What failed
        reason: &'static str,
    },
}

/// Result type for curve primitive operations
pub type Result<T> = core::result::Result<T, Error>;

// Default mapping for callers that do not classify errors themselves
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length { context, .. } => CoreError::Other {
                context,
                message: err.to_string(),
            },
            Error::InvalidScalar { context, reason } => {
                CoreError::InvalidPrivateKey { context, reason }
            }
            Error::InvalidEncoding { context, reason } => {
                CoreError::InvalidPeerPublicValue { context, reason }
            }
            Error::IdentityPoint { context } => CoreError::DegenerateSharedPoint { context },
            Error::RandomSource { context, reason } => {
                CoreError::KeyGenerationUnavailable { context, reason }
            }
        }
    }
}

// Include the validation submodule
pub mod validate;
