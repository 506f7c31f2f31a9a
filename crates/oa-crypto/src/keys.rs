//! # Signing key pair
//!
//! An ephemeral value object bundling the public and private key strings
//! for a single signing call. Nothing here persists key material or
//! interprets it — parsing happens inside the signer that consumes it.

/// A public/private key pair for one signing invocation.
///
/// Does not implement `Serialize`, and `Debug` redacts the private key —
/// key material must not leak into logs, errors, or artifacts.
#[derive(Clone)]
pub struct SigningKeyPair {
    public: String,
    private: String,
}

impl SigningKeyPair {
    /// Bundle a public and private key for a signing call.
    pub fn new(public: impl Into<String>, private: impl Into<String>) -> Self {
        Self {
            public: public.into(),
            private: private.into(),
        }
    }

    /// The public key string, used as the proof's verification method.
    pub fn public(&self) -> &str {
        &self.public
    }

    /// The private key string. Only signer implementations should read this.
    pub fn private(&self) -> &str {
        &self.private
    }
}

impl std::fmt::Debug for SigningKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeyPair")
            .field("public", &self.public)
            .field("private", &"<private>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_supplied_keys() {
        let pair = SigningKeyPair::new("0xpub", "0xpriv");
        assert_eq!(pair.public(), "0xpub");
        assert_eq!(pair.private(), "0xpriv");
    }

    #[test]
    fn debug_does_not_leak_private_key() {
        let pair = SigningKeyPair::new("0xpub", "0xdeadbeefsecret");
        let debug = format!("{pair:?}");
        assert!(debug.contains("0xpub"));
        assert!(debug.contains("<private>"));
        assert!(!debug.contains("deadbeefsecret"));
    }
}
