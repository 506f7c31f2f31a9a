//! # Document Error Types
//!
//! Structured errors for document classification and parsing in `oa-core`.
//! Uses `thiserror` for derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Errors from wrapped-document classification and parsing.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The value carries neither the v2 nor the v3 wrapped-document markers.
    #[error("unsupported document type: only wrapped v2 and v3 documents can be signed")]
    UnsupportedDocumentType,

    /// The value matched a generation's markers but failed typed parsing
    /// (missing required fields, malformed Merkle root, wrong field types).
    #[error("malformed {version} document: {reason}")]
    Malformed {
        /// The generation whose markers matched ("v2" or "v3").
        version: &'static str,
        /// What the parser rejected.
        reason: String,
    },

    /// A Merkle root value is not a hex digest.
    #[error("invalid merkle root: {0}")]
    InvalidMerkleRoot(String),
}
