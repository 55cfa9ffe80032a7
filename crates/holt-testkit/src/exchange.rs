//! In-memory block exchange

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use holt_core::{Block, Cid, Exchange, HoltError, Result};

/// Exchange fetching from a seedable map of "remote" blocks
#[derive(Debug, Default)]
pub struct MemExchange {
    remote: RwLock<HashMap<Cid, Block>>,
    announced: RwLock<Vec<Cid>>,
}

impl MemExchange {
    /// Empty exchange
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a block fetchable as if a peer held it
    pub fn seed_remote(&self, block: Block) {
        self.remote.write().insert(*block.cid(), block);
    }

    /// Cids announced through this exchange
    pub fn announced(&self) -> Vec<Cid> {
        self.announced.read().clone()
    }
}

#[async_trait]
impl Exchange for MemExchange {
    async fn fetch(&self, cid: &Cid) -> Result<Block> {
        self.remote
            .read()
            .get(cid)
            .cloned()
            .ok_or_else(|| HoltError::not_found(format!("no peer provides block {cid}")))
    }

    async fn announce(&self, block: &Block) -> Result<()> {
        self.announced.write().push(*block.cid());
        Ok(())
    }
}
