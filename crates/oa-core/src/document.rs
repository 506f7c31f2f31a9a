//! # Wrapped-document envelopes and version classification
//!
//! A wrapped document exists in one of two mutually incompatible schema
//! generations. The envelope around the signing-relevant fields is rigid;
//! everything else (document data, salts, obfuscation metadata, future
//! fields) rides in flattened maps and survives a sign round-trip verbatim.
//!
//! - **v2** stores its Merkle root at `signature.merkleRoot` and, once
//!   signed, accumulates an ordered `proof` array of signature proofs.
//! - **v3** stores its Merkle root at `proof.merkleRoot` and is signed by
//!   merging `key` and `signature` into that same proof object. A v3
//!   document carries at most one signature.
//!
//! Classification happens exactly once, at [`WrappedDocument::from_value`],
//! producing a sum type the signing layer dispatches on. There are no
//! scattered shape checks downstream.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DocumentError;
use crate::merkle::MerkleRoot;

/// Schema identifier for the v2 generation.
pub const SCHEMA_V2: &str = "https://schema.openattestation.com/2.0/schema.json";

/// Schema identifier for the v3 generation.
pub const SCHEMA_V3: &str = "https://schema.openattestation.com/3.0/schema.json";

/// The schema generation of a wrapped document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentVersion {
    /// The v2 generation (`signature.merkleRoot`, multi-signature).
    V2,
    /// The v3 generation (`proof.merkleRoot`, single-signature).
    V3,
}

impl std::fmt::Display for DocumentVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentVersion::V2 => write!(f, "v2"),
            DocumentVersion::V3 => write!(f, "v3"),
        }
    }
}

/// The `signature` block of a v2 wrapped document.
///
/// Produced by the upstream wrapping step; this crate only reads the
/// Merkle root from it. `proof` here is the Merkle inclusion proof for
/// batched wrapping, not a signature proof.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerkleProofBlock {
    /// The wrapping digest scheme (e.g. `"SHA3MerkleProof"`).
    #[serde(rename = "type")]
    pub proof_type: String,

    /// Digest of this document's salted contents.
    #[serde(rename = "targetHash")]
    pub target_hash: String,

    /// Merkle inclusion proof from `targetHash` up to `merkleRoot`.
    #[serde(default)]
    pub proof: Vec<String>,

    /// The Merkle root this stack signs.
    #[serde(rename = "merkleRoot")]
    pub merkle_root: MerkleRoot,

    /// Fields this crate does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A v2 wrapped document.
///
/// `proof` holds previously attached signature proofs as opaque values:
/// prior entries are preserved byte-for-byte through a signing pass, and
/// only the entry appended by this stack is built from the typed
/// [`SignatureProof`](crate::proof::SignatureProof) shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct V2Document {
    /// Schema identifier, when the wrapper recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// The salted document contents.
    pub data: Value,

    /// The wrapping signature block carrying the Merkle root.
    pub signature: MerkleProofBlock,

    /// Ordered sequence of signature proofs; empty until first signed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proof: Vec<Value>,

    /// Top-level fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl V2Document {
    /// Whether at least one signature proof is attached.
    pub fn is_signed(&self) -> bool {
        !self.proof.is_empty()
    }

    /// Append a signature proof, keeping all prior entries in place.
    pub fn append_proof(&mut self, proof: Value) {
        self.proof.push(proof);
    }
}

/// The `proof` block of a v3 wrapped document.
///
/// Wrapping writes the Merkle root and inclusion proof here; signing
/// merges `key` and `signature` into the same object. Salts, privacy
/// metadata, and any future fields ride in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct V3Proof {
    /// The wrapping proof type (e.g. `"OpenAttestationMerkleProofSignature2018"`).
    #[serde(rename = "type")]
    pub proof_type: String,

    /// The proof purpose (e.g. `"assertionMethod"`).
    #[serde(rename = "proofPurpose", default, skip_serializing_if = "Option::is_none")]
    pub proof_purpose: Option<String>,

    /// Digest of this document's salted contents.
    #[serde(rename = "targetHash")]
    pub target_hash: String,

    /// Merkle inclusion proof from `targetHash` up to `merkleRoot`.
    #[serde(default)]
    pub proofs: Vec<String>,

    /// The Merkle root this stack signs.
    #[serde(rename = "merkleRoot")]
    pub merkle_root: MerkleRoot,

    /// The public key that signed, once the document is signed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The signature over the 0x-prefixed Merkle root, once signed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    /// Fields this crate does not interpret (salts, privacy, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A v3 wrapped document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct V3Document {
    /// The proof block carrying the Merkle root and, once signed, the
    /// key and signature.
    pub proof: V3Proof,

    /// Everything else in the document (`@context`, `credentialSubject`,
    /// metadata), preserved verbatim.
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl V3Document {
    /// Whether a signature has already been merged into the proof block.
    pub fn is_signed(&self) -> bool {
        self.proof.key.is_some() || self.proof.signature.is_some()
    }

    /// Merge a key and signature into the proof block, consuming the
    /// unsigned document. All existing proof fields are retained.
    pub fn into_signed(mut self, key: impl Into<String>, signature: impl Into<String>) -> Self {
        self.proof.key = Some(key.into());
        self.proof.signature = Some(signature.into());
        self
    }
}

/// A wrapped document of either generation, classified once at entry.
#[derive(Debug, Clone, PartialEq)]
pub enum WrappedDocument {
    /// A v2 wrapped document.
    V2(V2Document),
    /// A v3 wrapped document.
    V3(V3Document),
}

impl WrappedDocument {
    /// Classify a JSON value as a wrapped document.
    ///
    /// Detection is structural: an object-valued `proof` carrying both
    /// `merkleRoot` and `targetHash` marks v3; `data` plus an
    /// object-valued `signature` carrying both marks v2. The v3 check
    /// runs first — a signed v2 document's `proof` is an array, so the
    /// two marker sets never overlap.
    ///
    /// # Errors
    ///
    /// `DocumentError::UnsupportedDocumentType` when neither marker set
    /// matches; `DocumentError::Malformed` when markers match but the
    /// typed envelope does not parse.
    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        if has_v3_markers(value) {
            let doc = serde_json::from_value(value.clone()).map_err(|e| {
                DocumentError::Malformed {
                    version: "v3",
                    reason: e.to_string(),
                }
            })?;
            return Ok(WrappedDocument::V3(doc));
        }
        if has_v2_markers(value) {
            let doc = serde_json::from_value(value.clone()).map_err(|e| {
                DocumentError::Malformed {
                    version: "v2",
                    reason: e.to_string(),
                }
            })?;
            return Ok(WrappedDocument::V2(doc));
        }
        Err(DocumentError::UnsupportedDocumentType)
    }

    /// The schema generation of this document.
    pub fn version(&self) -> DocumentVersion {
        match self {
            WrappedDocument::V2(_) => DocumentVersion::V2,
            WrappedDocument::V3(_) => DocumentVersion::V3,
        }
    }

    /// The Merkle root at the generation-specific location.
    pub fn merkle_root(&self) -> &MerkleRoot {
        match self {
            WrappedDocument::V2(doc) => &doc.signature.merkle_root,
            WrappedDocument::V3(doc) => &doc.proof.merkle_root,
        }
    }

    /// Whether the document already carries at least one signature.
    pub fn is_signed(&self) -> bool {
        match self {
            WrappedDocument::V2(doc) => doc.is_signed(),
            WrappedDocument::V3(doc) => doc.is_signed(),
        }
    }
}

fn has_v3_markers(value: &Value) -> bool {
    matches!(
        value.get("proof"),
        Some(Value::Object(proof))
            if proof.contains_key("merkleRoot") && proof.contains_key("targetHash")
    )
}

fn has_v2_markers(value: &Value) -> bool {
    value.get("data").is_some()
        && matches!(
            value.get("signature"),
            Some(Value::Object(sig))
                if sig.contains_key("merkleRoot") && sig.contains_key("targetHash")
        )
}
