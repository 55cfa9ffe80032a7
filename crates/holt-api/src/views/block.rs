//! Raw block capability

use std::collections::HashSet;

use holt_core::{
    Block, BlockService, BlockStat, Cid, DagRead, GcBlockStore, PinKind, Pinner, Result,
};

use crate::api::NodeApi;

/// Block-level get/put over the block service
#[derive(Clone, Copy)]
pub struct BlockApi<'a>(pub(crate) &'a NodeApi);

impl BlockApi<'_> {
    /// Store raw bytes as a block
    pub async fn put(&self, data: Vec<u8>) -> Result<Block> {
        let block = Block::new(data);
        self.0.blocks.add_block(block.clone()).await?;
        Ok(block)
    }

    /// Fetch a block's bytes, locally or from peers
    pub async fn get(&self, cid: &Cid) -> Result<Vec<u8>> {
        Ok(self.0.blocks.get_block(cid).await?.into_data())
    }

    /// Remove a block from local storage
    pub async fn rm(&self, cid: &Cid) -> Result<()> {
        self.0.blocks.rm_block(cid).await
    }

    /// Address and size of a block
    pub async fn stat(&self, cid: &Cid) -> Result<BlockStat> {
        let block = self.0.blocks.get_block(cid).await?;
        Ok(BlockStat {
            cid: *block.cid(),
            size: block.len(),
        })
    }

    /// Collect every block the pin set does not protect
    ///
    /// The keep set is the pinned cids plus the recursive closure of every
    /// recursive pin, computed under one session snapshot so a concurrent
    /// writer cannot skew the walk. Returns the removed cids.
    pub async fn gc(&self) -> Result<Vec<Cid>> {
        let pins = self.0.pinning.ls().await?;
        let session = self.0.derive_session(self.0.scope.child()).await?;

        let mut keep: HashSet<Cid> = HashSet::new();
        let mut stack = Vec::new();
        for entry in pins {
            keep.insert(entry.cid);
            if entry.kind == PinKind::Recursive {
                stack.push(entry.cid);
            }
        }
        while let Some(next) = stack.pop() {
            let node = session.dag.get(&next).await?;
            for link in node.links {
                if keep.insert(link.cid) {
                    stack.push(link.cid);
                }
            }
        }

        let keep: Vec<Cid> = keep.into_iter().collect();
        let removed = self.0.gc_blocks.gc(&keep).await?;
        tracing::debug!(removed = removed.len(), kept = keep.len(), "block gc");
        Ok(removed)
    }
}
