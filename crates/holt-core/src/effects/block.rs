//! Block storage and block service interfaces

use async_trait::async_trait;

use crate::content::{Block, Cid};
use crate::errors::Result;

/// Raw block storage
///
/// Keyed by cid; implementations must be safe for concurrent access.
#[async_trait]
pub trait BlockStore: Send + Sync {
    /// Store a block
    async fn put(&self, block: Block) -> Result<()>;

    /// Fetch a block if present locally
    async fn get(&self, cid: &Cid) -> Result<Option<Block>>;

    /// Whether a block is present locally
    async fn has(&self, cid: &Cid) -> Result<bool>;

    /// Remove a block, returning whether it was present
    async fn rm(&self, cid: &Cid) -> Result<bool>;

    /// List all locally stored cids
    async fn ls(&self) -> Result<Vec<Cid>>;
}

/// Block storage that supports garbage collection
#[async_trait]
pub trait GcBlockStore: BlockStore {
    /// Remove every block not in the keep set, returning the removed cids
    async fn gc(&self, keep: &[Cid]) -> Result<Vec<Cid>>;
}

/// Block access backed by local storage plus the peer exchange
///
/// A get that misses locally falls through to the exchange, so callers see
/// one fetch surface regardless of where the bytes live.
#[async_trait]
pub trait BlockService: Send + Sync {
    /// Store a block locally and announce it to the exchange
    async fn add_block(&self, block: Block) -> Result<Cid>;

    /// Fetch a block, locally or from peers
    async fn get_block(&self, cid: &Cid) -> Result<Block>;

    /// Remove a block from local storage
    async fn rm_block(&self, cid: &Cid) -> Result<()>;
}
