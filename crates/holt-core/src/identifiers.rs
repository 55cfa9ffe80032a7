//! Core identifier types used across the holt facade
//!
//! Peer identities are derived from Ed25519 verifying keys by hashing, so a
//! [`PeerId`] commits to the key that signs the peer's naming records.

use ed25519_dalek::VerifyingKey;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::HoltError;

/// Identifier of a node or remote peer
///
/// Derived from the peer's Ed25519 verifying key via SHA-256, so the id is
/// stable for the lifetime of the key and verifiable against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PeerId([u8; 32]);

impl PeerId {
    /// Derive the peer id committing to a verifying key
    pub fn from_verifying_key(key: &VerifyingKey) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"holt-peer-id");
        hasher.update(key.as_bytes());
        Self(hasher.finalize().into())
    }

    /// Construct from raw digest bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "peer-{}", hex::encode(self.0))
    }
}

impl FromStr for PeerId {
    type Err = HoltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_part = s
            .strip_prefix("peer-")
            .ok_or_else(|| HoltError::invalid_input(format!("malformed peer id: {s}")))?;
        let bytes = hex::decode(hex_part)
            .map_err(|e| HoltError::invalid_input(format!("malformed peer id: {e}")))?;
        let digest: [u8; 32] = bytes
            .try_into()
            .map_err(|_| HoltError::invalid_input("peer id must be a 32-byte digest"))?;
        Ok(Self(digest))
    }
}

/// Identifier of a pub/sub subscription held by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub Uuid);

impl SubscriptionId {
    /// Create a new random subscription id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}
