//! # Merkle Root Newtype
//!
//! The Merkle root is the digest computed by the upstream wrapping step and
//! embedded in the wrapped document. It is the only thing this stack ever
//! signs. The newtype guarantees the digest is well-formed hex before it
//! reaches a signer, and owns the `0x` prefixing convention.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DocumentError;

/// A hex-encoded Merkle root digest from a wrapped document.
///
/// The constructor validates that the value is non-empty ASCII hex. The
/// length is deliberately not pinned: the root is produced upstream, and
/// the signing layer signs whatever digest the wrapper emitted.
///
/// Serializes as the bare hex string, exactly as it appears in the
/// document; the `0x` marker is added only when building the signing
/// message via [`MerkleRoot::prefixed()`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MerkleRoot(String);

impl MerkleRoot {
    /// Create a Merkle root from a hex digest string.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::InvalidMerkleRoot` if the string is empty
    /// or contains non-hex characters. A `0x` prefix is rejected too —
    /// the document stores the raw digest, prefixing happens at signing.
    pub fn new(digest: impl Into<String>) -> Result<Self, DocumentError> {
        let digest = digest.into();
        if digest.is_empty() {
            return Err(DocumentError::InvalidMerkleRoot(
                "empty digest".to_string(),
            ));
        }
        if let Some(bad) = digest.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(DocumentError::InvalidMerkleRoot(format!(
                "non-hex character {bad:?} in digest"
            )));
        }
        Ok(Self(digest))
    }

    /// The raw hex digest as stored in the document.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digest with the standard `0x` marker — the exact message
    /// handed to the signer.
    pub fn prefixed(&self) -> String {
        format!("0x{}", self.0)
    }
}

impl std::fmt::Display for MerkleRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for MerkleRoot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MerkleRoot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let digest = String::deserialize(deserializer)?;
        Self::new(digest).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_digest() {
        let root = MerkleRoot::new("abcd1234").unwrap();
        assert_eq!(root.as_str(), "abcd1234");
    }

    #[test]
    fn prefixed_adds_marker() {
        let root = MerkleRoot::new("abcd").unwrap();
        assert_eq!(root.prefixed(), "0xabcd");
    }

    #[test]
    fn rejects_empty_digest() {
        assert!(MerkleRoot::new("").is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(MerkleRoot::new("xyz").is_err());
        assert!(MerkleRoot::new("0xabcd").is_err());
    }

    #[test]
    fn accepts_full_length_root() {
        let digest = "9b".repeat(32);
        let root = MerkleRoot::new(digest.clone()).unwrap();
        assert_eq!(root.as_str(), digest);
    }

    #[test]
    fn serde_roundtrip_is_bare_string() {
        let root = MerkleRoot::new("cafe").unwrap();
        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(json, "\"cafe\"");
        let back: MerkleRoot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn deserialize_rejects_bad_digest() {
        let result: Result<MerkleRoot, _> = serde_json::from_str("\"not hex!\"");
        assert!(result.is_err());
    }
}
