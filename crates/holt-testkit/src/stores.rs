//! In-memory block storage and block service

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use holt_core::{Block, BlockService, BlockStore, Cid, Exchange, GcBlockStore, HoltError, Result};

/// Block store backed by a map
///
/// Serves as both the base and the garbage-collectable store variant.
#[derive(Debug, Default)]
pub struct MemBlockStore {
    blocks: RwLock<HashMap<Cid, Block>>,
}

impl MemBlockStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blocks
    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }
}

#[async_trait]
impl BlockStore for MemBlockStore {
    async fn put(&self, block: Block) -> Result<()> {
        self.blocks.write().insert(*block.cid(), block);
        Ok(())
    }

    async fn get(&self, cid: &Cid) -> Result<Option<Block>> {
        Ok(self.blocks.read().get(cid).cloned())
    }

    async fn has(&self, cid: &Cid) -> Result<bool> {
        Ok(self.blocks.read().contains_key(cid))
    }

    async fn rm(&self, cid: &Cid) -> Result<bool> {
        Ok(self.blocks.write().remove(cid).is_some())
    }

    async fn ls(&self) -> Result<Vec<Cid>> {
        Ok(self.blocks.read().keys().copied().collect())
    }
}

#[async_trait]
impl GcBlockStore for MemBlockStore {
    async fn gc(&self, keep: &[Cid]) -> Result<Vec<Cid>> {
        let mut blocks = self.blocks.write();
        let doomed: Vec<Cid> = blocks
            .keys()
            .filter(|cid| !keep.contains(cid))
            .copied()
            .collect();
        for cid in &doomed {
            blocks.remove(cid);
        }
        Ok(doomed)
    }
}

/// Block service combining a local store with an exchange
///
/// Gets that miss locally fall through to the exchange and cache the result,
/// mirroring how a production block service hides where bytes come from.
pub struct MemBlockService {
    store: Arc<MemBlockStore>,
    exchange: Arc<dyn Exchange>,
}

impl MemBlockService {
    /// Service over a store and an exchange
    pub fn new(store: Arc<MemBlockStore>, exchange: Arc<dyn Exchange>) -> Self {
        Self { store, exchange }
    }
}

impl std::fmt::Debug for MemBlockService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemBlockService")
            .field("store", &self.store)
            .finish()
    }
}

#[async_trait]
impl BlockService for MemBlockService {
    async fn add_block(&self, block: Block) -> Result<Cid> {
        let cid = *block.cid();
        self.store.put(block.clone()).await?;
        self.exchange.announce(&block).await?;
        Ok(cid)
    }

    async fn get_block(&self, cid: &Cid) -> Result<Block> {
        if let Some(block) = self.store.get(cid).await? {
            return Ok(block);
        }
        let fetched = self.exchange.fetch(cid).await?;
        self.store.put(fetched.clone()).await?;
        Ok(fetched)
    }

    async fn rm_block(&self, cid: &Cid) -> Result<()> {
        if self.store.rm(cid).await? {
            Ok(())
        } else {
            Err(HoltError::not_found(format!("block {cid} not stored")))
        }
    }
}
