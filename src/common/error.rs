//! Error types for key-pair generation.

use thiserror::Error;

/// Convenience alias for fallible key-generation operations.
pub type KeygenResult<T> = Result<T, KeygenError>;

/// Boxed source error; the generation stages each wrap more than one
/// underlying error type (key generation and PEM encoding).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure categories for a single generation call.
///
/// Each variant names the stage that failed so callers can branch on the
/// category. The underlying cause is carried as a source, never swallowed.
#[derive(Debug, Error)]
pub enum KeygenError {
    /// The supplied options were rejected before any generation work began.
    #[error("invalid key-pair options: {reason}")]
    Configuration { reason: String },

    /// Generating the private key, or encoding it as PEM, failed.
    #[error("could not generate private key")]
    PrivateKeyGeneration {
        #[source]
        source: BoxError,
    },

    /// Deriving the public key from the private key, or encoding it, failed.
    #[error("could not derive public key")]
    PublicKeyDerivation {
        #[source]
        source: BoxError,
    },

    /// The blocking generation task panicked or was dropped at shutdown.
    #[error("key generation task did not complete")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },

    /// The deadline given to `generate_with_timeout` elapsed.
    #[error("key generation timed out after {timeout:?}")]
    Timeout { timeout: std::time::Duration },
}
