//! # Signer Error Types
//!
//! Structured errors for signing operations in `oa-crypto`. The attacher
//! propagates these unchanged — no retry, no fallback algorithm selection.

use thiserror::Error;

/// Errors from a signer implementation.
#[derive(Error, Debug)]
pub enum SignerError {
    /// The signer does not implement the requested algorithm.
    #[error("unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The private key could not be parsed into a usable signing key.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The message to sign is not a well-formed hex byte string.
    #[error("invalid signing message: {0}")]
    InvalidMessage(String),

    /// The signing backend failed.
    #[error("signing failed: {0}")]
    Backend(String),
}
