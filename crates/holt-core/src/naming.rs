//! Naming records and name identifiers
//!
//! A name is the mutable pointer of the system: it maps a peer's identity to
//! the cid of whatever that peer currently publishes. Records are signed with
//! the peer's Ed25519 key and carry a sequence number so resolvers can prefer
//! the freshest record.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::Cid;
use crate::errors::{HoltError, Result};
use crate::identifiers::PeerId;

/// A publishable name, bound to the peer identity that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IpnsName(PeerId);

impl IpnsName {
    /// The name owned by a peer
    pub fn for_peer(peer: PeerId) -> Self {
        Self(peer)
    }

    /// The owning peer identity
    pub fn peer(&self) -> PeerId {
        self.0
    }
}

impl fmt::Display for IpnsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/ipns/{}", self.0)
    }
}

impl From<PeerId> for IpnsName {
    fn from(peer: PeerId) -> Self {
        Self(peer)
    }
}

/// A signed naming record pointing a name at a cid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// The cid the name currently points at
    pub value: Cid,
    /// Monotonically increasing publish counter
    pub sequence: u64,
    /// Key the record is signed with; must match the name's peer identity
    pub verifying_key: VerifyingKey,
    /// Signature over the record's signable bytes
    pub signature: Signature,
}

impl NameRecord {
    /// Create and sign a record with the publishing key
    pub fn signed(key: &SigningKey, value: Cid, sequence: u64) -> Self {
        let signature = key.sign(&Self::signable_bytes(&value, sequence));
        Self {
            value,
            sequence,
            verifying_key: key.verifying_key(),
            signature,
        }
    }

    /// Verify the record's signature and that its key owns the given name
    pub fn verify(&self, name: &IpnsName) -> Result<()> {
        let signer = PeerId::from_verifying_key(&self.verifying_key);
        if signer != name.peer() {
            return Err(HoltError::invalid_input(format!(
                "record signed by {signer}, name owned by {}",
                name.peer()
            )));
        }
        self.verifying_key
            .verify(
                &Self::signable_bytes(&self.value, self.sequence),
                &self.signature,
            )
            .map_err(|e| HoltError::invalid_input(format!("bad record signature: {e}")))
    }

    fn signable_bytes(value: &Cid, sequence: u64) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(32 + 8 + 16);
        bytes.extend_from_slice(b"holt-name-record");
        bytes.extend_from_slice(value.as_bytes());
        bytes.extend_from_slice(&sequence.to_be_bytes());
        bytes
    }
}

/// Description of a signing key held by the node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    /// Key name; the node identity key is named `"self"`
    pub name: String,
    /// Peer identity derived from the key
    pub id: PeerId,
    /// The key's public half
    pub verifying_key: VerifyingKey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_key(seed: u64) -> SigningKey {
        SigningKey::generate(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn signed_record_verifies_for_owner() {
        let key = test_key(11);
        let name = IpnsName::for_peer(PeerId::from_verifying_key(&key.verifying_key()));
        let record = NameRecord::signed(&key, Cid::for_data(b"content"), 3);
        assert!(record.verify(&name).is_ok());
    }

    #[test]
    fn record_rejected_for_foreign_name() {
        let key = test_key(11);
        let other = test_key(12);
        let name = IpnsName::for_peer(PeerId::from_verifying_key(&other.verifying_key()));
        let record = NameRecord::signed(&key, Cid::for_data(b"content"), 3);
        assert!(record.verify(&name).is_err());
    }

    #[test]
    fn tampered_record_fails_verification() {
        let key = test_key(11);
        let name = IpnsName::for_peer(PeerId::from_verifying_key(&key.verifying_key()));
        let mut record = NameRecord::signed(&key, Cid::for_data(b"content"), 3);
        record.sequence = 4;
        assert!(record.verify(&name).is_err());
    }
}
