//! # oa-core — Document Model for OpenAttestation Signing
//!
//! Foundational types for the signing stack:
//!
//! - **Documents** (`document.rs`): rigid envelopes for the two wrapped
//!   schema generations, version classification as a sum type, and the
//!   signed-state predicates.
//!
//! - **Merkle root** (`merkle.rs`): validated newtype over the hex digest
//!   the upstream wrapping step embedded in the document. Owns the `0x`
//!   prefixing convention for signing messages.
//!
//! - **Proof shapes** (`proof.rs`): the v2 signature-proof object with the
//!   exact wire field names downstream verifiers match on.
//!
//! ## Crate Policy
//!
//! - Leaf of the workspace DAG; no internal dependencies.
//! - Documents are immutable values: every operation takes input by
//!   reference or by move and produces a new value, never mutating a
//!   caller's document in place.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod merkle;
pub mod proof;

pub use document::{
    DocumentVersion, MerkleProofBlock, V2Document, V3Document, V3Proof, WrappedDocument,
    SCHEMA_V2, SCHEMA_V3,
};
pub use error::DocumentError;
pub use merkle::MerkleRoot;
pub use proof::{ProofPurpose, ProofType, SignatureProof};
