//! # oa-crypto — Signing Capability for the Attestation Stack
//!
//! Provides the building blocks the proof attacher delegates signing to:
//!
//! - **Algorithm identifiers** (`algorithm.rs`): the recognized signing
//!   scheme names, serialized as their wire literals.
//! - **Key pairs** (`keys.rs`): the per-call public/private key value
//!   object. Private keys are never serialized and `Debug` redacts them.
//! - **Signers** (`signer.rs`): the async [`MessageSigner`] capability
//!   trait plus the production [`Secp256k1Signer`], which reproduces the
//!   Ethereum wallet signing scheme (EIP-191 prefix, Keccak-256,
//!   deterministic ECDSA, 65-byte `r ‖ s ‖ v` output).
//!
//! This crate knows nothing about documents; it signs byte strings. The
//! document model lives in `oa-core` and the attachment protocol in
//! `oa-sign`.

pub mod algorithm;
pub mod error;
pub mod keys;
pub mod signer;

pub use algorithm::SigningAlgorithm;
pub use error::SignerError;
pub use keys::SigningKeyPair;
pub use signer::{MessageSigner, Secp256k1Signer};
