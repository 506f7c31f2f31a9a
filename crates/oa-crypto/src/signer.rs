//! # Message signing
//!
//! Defines the [`MessageSigner`] capability trait the attacher is generic
//! over, and the production [`Secp256k1Signer`].
//!
//! The signer receives the message exactly as the attacher built it: the
//! document's Merkle root with the standard `0x` marker. The message is a
//! hex byte string — signers operate on the decoded bytes, not on the
//! ASCII characters of the hex rendering.
//!
//! ## Secp256k1 signature format
//!
//! [`Secp256k1Signer`] reproduces the Ethereum wallet signing scheme so
//! its output verifies against existing Secp256k1 verification keys:
//! Keccak-256 over the EIP-191 `"\x19Ethereum Signed Message:\n" + len`
//! prefix and the message bytes, deterministic ECDSA (RFC 6979) over
//! secp256k1, and a 65-byte `r ‖ s ‖ v` signature with `v = 27 +
//! recovery_id`, rendered as a 0x-prefixed hex string.

use async_trait::async_trait;
use k256::ecdsa::SigningKey;
use sha3::{Digest, Keccak256};

use crate::algorithm::SigningAlgorithm;
use crate::error::SignerError;
use crate::keys::SigningKeyPair;

/// An asynchronous signing capability.
///
/// Implementations must be `Send + Sync` so one signer can serve
/// concurrent signing calls; each call is independent and has no side
/// effects on the documents being signed.
#[async_trait]
pub trait MessageSigner: Send + Sync {
    /// Sign a 0x-prefixed hex message with the given key pair.
    ///
    /// Returns the signature as a string in the implementation's output
    /// encoding. Fails if the algorithm is not implemented, the key is
    /// unusable, or the backend errors; callers propagate these unchanged.
    async fn sign(
        &self,
        algorithm: SigningAlgorithm,
        message: &str,
        key_pair: &SigningKeyPair,
    ) -> Result<String, SignerError>;
}

#[async_trait]
impl<S: MessageSigner + ?Sized> MessageSigner for &S {
    async fn sign(
        &self,
        algorithm: SigningAlgorithm,
        message: &str,
        key_pair: &SigningKeyPair,
    ) -> Result<String, SignerError> {
        (**self).sign(algorithm, message, key_pair).await
    }
}

/// The production secp256k1 signer.
///
/// Stateless; construct once and share freely across calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Signer;

#[async_trait]
impl MessageSigner for Secp256k1Signer {
    async fn sign(
        &self,
        algorithm: SigningAlgorithm,
        message: &str,
        key_pair: &SigningKeyPair,
    ) -> Result<String, SignerError> {
        match algorithm {
            SigningAlgorithm::Secp256k1VerificationKey2018 => {}
        }

        let message_hex = message.strip_prefix("0x").ok_or_else(|| {
            SignerError::InvalidMessage("message must carry the 0x marker".to_string())
        })?;
        let message_bytes = hex_to_bytes(message_hex).map_err(SignerError::InvalidMessage)?;

        let key_bytes = hex_to_bytes(strip_hex_marker(key_pair.private()))
            .map_err(SignerError::InvalidPrivateKey)?;
        let signing_key = SigningKey::from_slice(&key_bytes)
            .map_err(|e| SignerError::InvalidPrivateKey(e.to_string()))?;

        let digest = eip191_digest(&message_bytes);
        let (signature, recovery_id) = signing_key
            .sign_prehash_recoverable(&digest)
            .map_err(|e| SignerError::Backend(e.to_string()))?;

        let mut sealed = [0u8; 65];
        sealed[..64].copy_from_slice(&signature.to_bytes());
        sealed[64] = 27 + recovery_id.to_byte();
        Ok(format!("0x{}", bytes_to_hex(&sealed)))
    }
}

/// Keccak-256 digest of the message under the EIP-191 personal-message
/// prefix. The length in the prefix is the decoded byte count.
fn eip191_digest(message: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(b"\x19Ethereum Signed Message:\n");
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message);
    hasher.finalize().into()
}

// Private keys arrive with or without the marker; messages must carry it.
fn strip_hex_marker(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

// ---------------------------------------------------------------------------
// Hex utilities (no external hex crate dependency)
// ---------------------------------------------------------------------------

fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, String> {
    // Guard before slicing at byte offsets: a multi-byte character would
    // otherwise panic on a char boundary instead of returning an error.
    if !hex.is_ascii() {
        return Err("hex string must be ASCII".to_string());
    }
    if hex.len() % 2 != 0 {
        return Err("hex string must have even length".to_string());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at position {i}: {e}"))
        })
        .collect()
}
