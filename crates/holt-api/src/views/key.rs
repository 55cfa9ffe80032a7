//! Key capability
//!
//! The node holds one signing key, exposed as the `"self"` key. This is the
//! only capability besides naming that touches the key material.

use ed25519_dalek::{Signature, Signer, Verifier};

use holt_core::KeyInfo;

use crate::api::NodeApi;

/// Access to the node's signing identity
#[derive(Clone, Copy)]
pub struct KeyApi<'a>(pub(crate) &'a NodeApi);

impl KeyApi<'_> {
    /// The node's own key
    pub fn self_key(&self) -> KeyInfo {
        KeyInfo {
            name: "self".to_string(),
            id: self.0.identity,
            verifying_key: self.0.signing_key.verifying_key(),
        }
    }

    /// All keys held by the node
    pub fn list(&self) -> Vec<KeyInfo> {
        vec![self.self_key()]
    }

    /// Sign bytes with the node key
    pub fn sign(&self, data: &[u8]) -> Signature {
        self.0.signing_key.sign(data)
    }

    /// Verify a signature against the node key
    pub fn verify(&self, data: &[u8], signature: &Signature) -> bool {
        self.0
            .signing_key
            .verifying_key()
            .verify(data, signature)
            .is_ok()
    }
}
