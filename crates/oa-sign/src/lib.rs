//! # oa-sign — Signature-Proof Attachment
//!
//! Signs a wrapped document's Merkle root and attaches the resulting
//! signature proof, composing with whatever proofs the document already
//! carries:
//!
//! - **v2** documents accumulate proofs in an ordered sequence; signing
//!   appends and never touches prior entries.
//! - **v3** documents hold a single proof object; signing merges `key`
//!   and `signature` into it and refuses to sign twice.
//!
//! The actual signing primitive is a capability: [`attach_signature`]
//! accepts any [`MessageSigner`], and [`sign_document`] wires in the
//! production [`Secp256k1Signer`](oa_crypto::Secp256k1Signer).
//!
//! ```no_run
//! use oa_sign::{sign_document, SigningAlgorithm};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), oa_sign::SignError> {
//! let wrapped = json!({
//!     "data": {"name": "b53bd074:string:Certificate"},
//!     "signature": {
//!         "type": "SHA3MerkleProof",
//!         "targetHash": "abcd",
//!         "proof": [],
//!         "merkleRoot": "abcd"
//!     }
//! });
//! let signed = sign_document(
//!     &wrapped,
//!     SigningAlgorithm::Secp256k1VerificationKey2018,
//!     "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
//!     "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod attach;

pub use attach::{attach_signature, sign_document, SignError};

// Re-export the types callers need to drive the API.
pub use oa_core::{DocumentError, DocumentVersion, WrappedDocument};
pub use oa_crypto::{MessageSigner, Secp256k1Signer, SigningAlgorithm, SigningKeyPair};
