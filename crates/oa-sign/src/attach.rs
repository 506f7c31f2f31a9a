//! # Signature-proof attachment
//!
//! The one operation this stack exists for: sign a wrapped document's
//! Merkle root and compose the resulting proof with the document's
//! current signature state.
//!
//! The two generations compose differently, and the asymmetry is
//! deliberate schema behavior, not something to unify here:
//!
//! - **v2** accumulates signatures: each pass appends one proof to the
//!   ordered `proof` sequence, leaving prior entries byte-for-byte
//!   untouched.
//! - **v3** holds at most one signature: `key` and `signature` are merged
//!   into the existing proof object, and re-signing an already-signed
//!   document fails.
//!
//! The signer runs before the already-signed check, matching the order
//! the surrounding ecosystem has always used.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use oa_core::{DocumentError, SignatureProof, WrappedDocument};
use oa_crypto::{MessageSigner, Secp256k1Signer, SignerError, SigningAlgorithm, SigningKeyPair};

/// Errors from signing a wrapped document.
#[derive(Error, Debug)]
pub enum SignError {
    /// The input is not a recognized wrapped document, or is malformed.
    #[error("document validation failed: {0}")]
    Document(#[from] DocumentError),

    /// A v3 document already carries a signature; it cannot be re-signed.
    #[error("document has been signed")]
    AlreadySigned,

    /// The delegated signer failed. Propagated unchanged — no retry, no
    /// fallback algorithm.
    #[error("signer error: {0}")]
    Signer(#[from] SignerError),

    /// Re-serializing the signed document failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sign `document`'s Merkle root and return a new document value with the
/// proof attached.
///
/// The input is classified once, the `0x`-prefixed Merkle root is handed
/// to `signer`, and the proof is composed per the document's generation.
/// The input value is never mutated; either a fully signed document is
/// returned or no document at all.
///
/// # Errors
///
/// - [`SignError::Document`] if the value is not a wrapped v2/v3 document
///   (the signer is never invoked in that case).
/// - [`SignError::AlreadySigned`] for a v3 document that already carries
///   a signature.
/// - [`SignError::Signer`] for any failure in the delegated signer.
pub async fn attach_signature<S>(
    document: &Value,
    algorithm: SigningAlgorithm,
    key_pair: &SigningKeyPair,
    signer: &S,
) -> Result<Value, SignError>
where
    S: MessageSigner + ?Sized,
{
    let wrapped = WrappedDocument::from_value(document)?;
    debug!(version = %wrapped.version(), %algorithm, "signing wrapped document");

    let message = wrapped.merkle_root().prefixed();
    let signature = signer.sign(algorithm, &message, key_pair).await?;

    let signed = match wrapped {
        WrappedDocument::V3(doc) => {
            if doc.is_signed() {
                return Err(SignError::AlreadySigned);
            }
            serde_json::to_value(doc.into_signed(key_pair.public(), signature))?
        }
        WrappedDocument::V2(mut doc) => {
            let proof = SignatureProof::new(key_pair.public(), signature);
            doc.append_proof(serde_json::to_value(proof)?);
            serde_json::to_value(doc)?
        }
    };

    debug!("proof attached");
    Ok(signed)
}

/// Sign a wrapped document with the production secp256k1 signer.
///
/// Convenience wrapper over [`attach_signature`] that bundles the key
/// strings into a per-call [`SigningKeyPair`].
pub async fn sign_document(
    document: &Value,
    algorithm: SigningAlgorithm,
    public_key: &str,
    private_key: &str,
) -> Result<Value, SignError> {
    let key_pair = SigningKeyPair::new(public_key, private_key);
    attach_signature(document, algorithm, &key_pair, &Secp256k1Signer).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records every message it is asked to sign and returns a canned
    /// signature.
    struct StubSigner {
        signature: &'static str,
        messages: Mutex<Vec<String>>,
    }

    impl StubSigner {
        fn returning(signature: &'static str) -> Self {
            Self {
                signature,
                messages: Mutex::new(Vec::new()),
            }
        }

        fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessageSigner for StubSigner {
        async fn sign(
            &self,
            _algorithm: SigningAlgorithm,
            message: &str,
            _key_pair: &SigningKeyPair,
        ) -> Result<String, SignerError> {
            self.messages.lock().unwrap().push(message.to_string());
            Ok(self.signature.to_string())
        }
    }

    /// Refuses every algorithm, standing in for a signer that does not
    /// implement the requested scheme.
    struct RefusingSigner;

    #[async_trait]
    impl MessageSigner for RefusingSigner {
        async fn sign(
            &self,
            algorithm: SigningAlgorithm,
            _message: &str,
            _key_pair: &SigningKeyPair,
        ) -> Result<String, SignerError> {
            Err(SignerError::UnsupportedAlgorithm(algorithm.to_string()))
        }
    }

    fn wrapped_v2() -> Value {
        json!({
            "version": oa_core::SCHEMA_V2,
            "data": {"name": "b53bd074:string:Certificate"},
            "signature": {
                "type": "SHA3MerkleProof",
                "targetHash": "abcd",
                "proof": [],
                "merkleRoot": "abcd"
            }
        })
    }

    fn wrapped_v3() -> Value {
        json!({
            "@context": ["https://www.w3.org/2018/credentials/v1"],
            "version": oa_core::SCHEMA_V3,
            "credentialSubject": {"id": "did:example:1234"},
            "proof": {
                "type": "OpenAttestationMerkleProofSignature2018",
                "proofPurpose": "assertionMethod",
                "targetHash": "abcd",
                "proofs": [],
                "merkleRoot": "abcd",
                "salts": "W3sidmFsdWUi",
                "privacy": {"obfuscated": []}
            }
        })
    }

    fn key_pair() -> SigningKeyPair {
        SigningKeyPair::new("pub1", "priv1")
    }

    #[tokio::test]
    async fn v3_attaches_key_and_signature() {
        let signer = StubSigner::returning("sig1");
        let signed = attach_signature(
            &wrapped_v3(),
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &signer,
        )
        .await
        .unwrap();

        assert_eq!(signed["proof"]["key"], json!("pub1"));
        assert_eq!(signed["proof"]["signature"], json!("sig1"));
        // Pre-existing proof fields are retained.
        assert_eq!(signed["proof"]["merkleRoot"], json!("abcd"));
        assert_eq!(signed["proof"]["salts"], json!("W3sidmFsdWUi"));
        assert_eq!(signed["proof"]["privacy"], json!({"obfuscated": []}));
    }

    #[tokio::test]
    async fn v3_proof_stays_an_object_not_an_array() {
        let signer = StubSigner::returning("sig1");
        let signed = attach_signature(
            &wrapped_v3(),
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &signer,
        )
        .await
        .unwrap();
        assert!(signed["proof"].is_object());
    }

    #[tokio::test]
    async fn v3_second_signing_fails() {
        let signer = StubSigner::returning("sig1");
        let signed = attach_signature(
            &wrapped_v3(),
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &signer,
        )
        .await
        .unwrap();

        let result = attach_signature(
            &signed,
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &signer,
        )
        .await;
        assert!(matches!(result, Err(SignError::AlreadySigned)));
    }

    #[tokio::test]
    async fn v2_first_signing_creates_one_proof_entry() {
        let signer = StubSigner::returning("sig1");
        let signed = attach_signature(
            &wrapped_v2(),
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &signer,
        )
        .await
        .unwrap();

        let proofs = signed["proof"].as_array().unwrap();
        assert_eq!(proofs.len(), 1);
        assert_eq!(proofs[0]["verificationMethod"], json!("pub1"));
        assert_eq!(proofs[0]["signature"], json!("sig1"));
        assert_eq!(proofs[0]["type"], json!("OpenAttestationSignature2018"));
        assert_eq!(proofs[0]["proofPurpose"], json!("assertionMethod"));
    }

    #[tokio::test]
    async fn v2_starting_from_empty_proof_sequence() {
        let mut document = wrapped_v2();
        document["proof"] = json!([]);
        let signer = StubSigner::returning("sig1");
        let signed = attach_signature(
            &document,
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &signer,
        )
        .await
        .unwrap();
        assert_eq!(signed["proof"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn v2_second_signing_appends_and_preserves_first_entry() {
        let first_signer = StubSigner::returning("sig1");
        let once = attach_signature(
            &wrapped_v2(),
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &first_signer,
        )
        .await
        .unwrap();
        let first_entry = once["proof"][0].clone();

        let second_signer = StubSigner::returning("sig2");
        let twice = attach_signature(
            &once,
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &SigningKeyPair::new("pub2", "priv2"),
            &second_signer,
        )
        .await
        .unwrap();

        let proofs = twice["proof"].as_array().unwrap();
        assert_eq!(proofs.len(), 2);
        assert_eq!(proofs[0], first_entry);
        assert_eq!(proofs[1]["verificationMethod"], json!("pub2"));
        assert_eq!(proofs[1]["signature"], json!("sig2"));
    }

    #[tokio::test]
    async fn signer_receives_prefixed_merkle_root() {
        let signer = StubSigner::returning("sig1");
        attach_signature(
            &wrapped_v2(),
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &signer,
        )
        .await
        .unwrap();
        attach_signature(
            &wrapped_v3(),
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &signer,
        )
        .await
        .unwrap();
        assert_eq!(signer.messages(), vec!["0xabcd", "0xabcd"]);
    }

    #[tokio::test]
    async fn unsupported_document_never_reaches_signer() {
        let signer = StubSigner::returning("sig1");
        let result = attach_signature(
            &json!({"name": "plain object"}),
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &signer,
        )
        .await;
        assert!(matches!(
            result,
            Err(SignError::Document(DocumentError::UnsupportedDocumentType))
        ));
        assert!(signer.messages().is_empty());
    }

    #[tokio::test]
    async fn input_document_is_not_mutated() {
        let document = wrapped_v2();
        let snapshot = document.clone();
        let signer = StubSigner::returning("sig1");
        attach_signature(
            &document,
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &signer,
        )
        .await
        .unwrap();
        assert_eq!(document, snapshot);
    }

    #[tokio::test]
    async fn signer_failure_propagates_unchanged() {
        let result = attach_signature(
            &wrapped_v2(),
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &RefusingSigner,
        )
        .await;
        assert!(matches!(
            result,
            Err(SignError::Signer(SignerError::UnsupportedAlgorithm(_)))
        ));
    }

    #[tokio::test]
    async fn v2_created_timestamp_is_iso8601() {
        let signer = StubSigner::returning("sig1");
        let signed = attach_signature(
            &wrapped_v2(),
            SigningAlgorithm::Secp256k1VerificationKey2018,
            &key_pair(),
            &signer,
        )
        .await
        .unwrap();
        let created = signed["proof"][0]["created"].as_str().unwrap();
        assert!(created.parse::<chrono::DateTime<chrono::Utc>>().is_ok());
    }
}
