//! # Signing algorithm identifiers
//!
//! The identifier names the verification-key scheme a signature can be
//! checked against, following the W3C security vocabulary naming. The
//! serialized form is the wire literal consumers match on.

use serde::{Deserialize, Serialize};

/// A recognized signing algorithm identifier.
///
/// Marked `#[non_exhaustive]`: new schemes may be added without breaking
/// downstream matches. A signer implementation answers
/// [`SignerError::UnsupportedAlgorithm`](crate::SignerError::UnsupportedAlgorithm)
/// for any variant it does not implement.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SigningAlgorithm {
    /// ECDSA over secp256k1, verifiable against a Secp256k1 verification key.
    Secp256k1VerificationKey2018,
}

impl std::fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SigningAlgorithm::Secp256k1VerificationKey2018 => {
                write!(f, "Secp256k1VerificationKey2018")
            }
        }
    }
}
