//! Content addressing: cids and raw blocks
//!
//! A [`Cid`] is the SHA-256 digest of a block's bytes. Blocks are immutable:
//! the cid is computed at construction time and checked when a block arrives
//! from a remote peer, so callers never hold a block whose address lies about
//! its content.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::errors::{HoltError, Result};

/// Content identifier: the SHA-256 address of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cid([u8; 32]);

impl Cid {
    /// Compute the cid addressing the given bytes
    pub fn for_data(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
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

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Cid {
    type Err = HoltError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes =
            hex::decode(s).map_err(|e| HoltError::invalid_input(format!("malformed cid: {e}")))?;
        let digest: [u8; 32] = bytes
            .try_into()
            .map_err(|_| HoltError::invalid_input("cid must be a 32-byte digest"))?;
        Ok(Self(digest))
    }
}

/// A raw content-addressed block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    cid: Cid,
    data: Vec<u8>,
}

impl Block {
    /// Create a block, computing its address from the data
    pub fn new(data: Vec<u8>) -> Self {
        let cid = Cid::for_data(&data);
        Self { cid, data }
    }

    /// Reconstruct a block received with a claimed address, verifying it
    pub fn verified(cid: Cid, data: Vec<u8>) -> Result<Self> {
        let actual = Cid::for_data(&data);
        if actual != cid {
            return Err(HoltError::invalid_input(format!(
                "block data hashes to {actual}, claimed {cid}"
            )));
        }
        Ok(Self { cid, data })
    }

    /// The block's address
    pub fn cid(&self) -> &Cid {
        &self.cid
    }

    /// The block's bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the block, returning its bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Size of the block in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the block is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Size and address information about a stored block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStat {
    /// The block's address
    pub cid: Cid,
    /// Size of the block in bytes
    pub size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cid_is_deterministic() {
        assert_eq!(Cid::for_data(b"hello"), Cid::for_data(b"hello"));
        assert_ne!(Cid::for_data(b"hello"), Cid::for_data(b"world"));
    }

    #[test]
    fn cid_display_roundtrips() {
        let cid = Cid::for_data(b"roundtrip");
        let parsed: Cid = cid.to_string().parse().expect("parse");
        assert_eq!(cid, parsed);
    }

    #[test]
    fn verified_block_rejects_wrong_cid() {
        let claimed = Cid::for_data(b"other");
        assert!(Block::verified(claimed, b"data".to_vec()).is_err());
        let honest = Cid::for_data(b"data");
        assert!(Block::verified(honest, b"data".to_vec()).is_ok());
    }
}
