//! # Proof shapes for signed documents
//!
//! Defines the signature-proof object appended to v2 documents when they
//! are signed. The shape is rigid and its field names are part of the
//! OpenAttestation wire format — any verifier downstream matches on these
//! exact names.
//!
//! The v3 generation does not use this type: a v3 signature is merged into
//! the document's existing `proof` block (see `document::V3Proof`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The type of a signature proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofType {
    /// Secp256k1 signature over the document's Merkle root.
    OpenAttestationSignature2018,
}

impl std::fmt::Display for ProofType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProofType::OpenAttestationSignature2018 => {
                write!(f, "OpenAttestationSignature2018")
            }
        }
    }
}

/// The purpose of a signature proof.
///
/// Follows the W3C Data Integrity proof purpose vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProofPurpose {
    /// The signer asserts the document's contents are true.
    AssertionMethod,
}

impl std::fmt::Display for ProofPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProofPurpose::AssertionMethod => write!(f, "assertionMethod"),
        }
    }
}

/// A signature proof on a v2 wrapped document.
///
/// Signed v2 documents carry an ordered sequence of these; each signing
/// pass appends one and leaves prior entries untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureProof {
    /// The proof type.
    #[serde(rename = "type")]
    pub proof_type: ProofType,

    /// When the proof was created (UTC).
    pub created: DateTime<Utc>,

    /// The purpose of this proof.
    #[serde(rename = "proofPurpose")]
    pub proof_purpose: ProofPurpose,

    /// The public key that produced the signature.
    #[serde(rename = "verificationMethod")]
    pub verification_method: String,

    /// The signature over the 0x-prefixed Merkle root, as the signer
    /// returned it.
    pub signature: String,
}

impl SignatureProof {
    /// Build a proof stamped with the current UTC time.
    pub fn new(verification_method: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            proof_type: ProofType::OpenAttestationSignature2018,
            created: Utc::now(),
            proof_purpose: ProofPurpose::AssertionMethod,
            verification_method: verification_method.into(),
            signature: signature.into(),
        }
    }
}
