//! Error type definitions for key-exchange operations

/// Primary error type for key-exchange operations
///
/// Every failure is local and recoverable: a handshake that receives one of
/// these rejects the attempt and carries on. No variant ever carries secret
/// material.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Supplied private key bytes are not a scalar in [1, n-1]
    #[error("invalid private key: {context}: {reason}")]
    InvalidPrivateKey {
        context: &'static str,
        reason: &'static str,
    },

    /// The secure random source could not produce a private key
    #[error("key generation unavailable: {context}: {reason}")]
    KeyGenerationUnavailable {
        context: &'static str,
        reason: &'static str,
    },

    /// Peer-supplied public value failed length, tag, range or curve checks
    #[error("invalid peer public value: {context}: {reason}")]
    InvalidPeerPublicValue {
        context: &'static str,
        reason: &'static str,
    },

    /// Scalar multiplication produced the point at infinity
    #[error("degenerate shared point: {context}")]
    DegenerateSharedPoint { context: &'static str },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for key-exchange operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidPrivateKey { reason, .. } => Self::InvalidPrivateKey { context, reason },
            Self::KeyGenerationUnavailable { reason, .. } => {
                Self::KeyGenerationUnavailable { context, reason }
            }
            Self::InvalidPeerPublicValue { reason, .. } => {
                Self::InvalidPeerPublicValue { context, reason }
            }
            Self::DegenerateSharedPoint { .. } => Self::DegenerateSharedPoint { context },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Context the error was raised in
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidPrivateKey { context, .. }
            | Self::KeyGenerationUnavailable { context, .. }
            | Self::InvalidPeerPublicValue { context, .. }
            | Self::DegenerateSharedPoint { context }
            | Self::Other { context, .. } => context,
        }
    }

    /// Whether the failure was caused by the peer's public value
    ///
    /// A handshake uses this to tell a hostile or broken peer apart from a
    /// local fault such as a bad stored key or an unavailable RNG.
    pub fn is_peer_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidPeerPublicValue { .. } | Self::DegenerateSharedPoint { .. }
        )
    }
}
