//! In-memory merkle-DAG service
//!
//! Sits on top of a block store the way a production DAG service does: nodes
//! are persisted as canonically encoded blocks, so DAG cids are block cids
//! and block-level operations (gc, provide) see DAG content.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use holt_core::{Block, BlockStore, Cid, DagNode, DagRead, DagService, HoltError, Result};

use crate::stores::MemBlockStore;

/// DAG service persisting nodes as blocks in a shared store
#[derive(Debug)]
pub struct MemDagService {
    store: Arc<MemBlockStore>,
}

impl MemDagService {
    /// Service over a block store
    pub fn new(store: Arc<MemBlockStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DagRead for MemDagService {
    async fn get(&self, cid: &Cid) -> Result<DagNode> {
        let block = self
            .store
            .get(cid)
            .await?
            .ok_or_else(|| HoltError::not_found(format!("dag node {cid} not stored")))?;
        DagNode::decode(block.data())
    }

    async fn has(&self, cid: &Cid) -> Result<bool> {
        self.store.has(cid).await
    }
}

#[async_trait]
impl DagService for MemDagService {
    async fn put(&self, node: DagNode) -> Result<Cid> {
        let block = Block::new(node.encode()?);
        let cid = *block.cid();
        self.store.put(block).await?;
        Ok(cid)
    }

    async fn remove(&self, cid: &Cid) -> Result<bool> {
        self.store.rm(cid).await
    }

    async fn snapshot(&self) -> Result<Arc<dyn DagRead>> {
        // Clone the whole block map so the frozen view really is isolated
        // from later writes — the property session tests depend on.
        let mut blocks = HashMap::new();
        for cid in self.store.ls().await? {
            if let Some(block) = self.store.get(&cid).await? {
                blocks.insert(cid, block);
            }
        }
        Ok(Arc::new(FrozenDag { blocks }))
    }
}

/// A read-only copy of the DAG state at snapshot time
#[derive(Debug)]
struct FrozenDag {
    blocks: HashMap<Cid, Block>,
}

#[async_trait]
impl DagRead for FrozenDag {
    async fn get(&self, cid: &Cid) -> Result<DagNode> {
        let block = self
            .blocks
            .get(cid)
            .ok_or_else(|| HoltError::not_found(format!("dag node {cid} not in snapshot")))?;
        DagNode::decode(block.data())
    }

    async fn has(&self, cid: &Cid) -> Result<bool> {
        Ok(self.blocks.contains_key(cid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dag() -> MemDagService {
        MemDagService::new(Arc::new(MemBlockStore::new()))
    }

    #[tokio::test]
    async fn node_cids_match_block_cids() {
        let dag = dag();
        let node = DagNode::leaf(b"payload".to_vec());
        let expected = node.cid().unwrap();
        assert_eq!(dag.put(node).await.unwrap(), expected);
        assert!(dag.has(&expected).await.unwrap());
    }

    #[tokio::test]
    async fn snapshot_does_not_observe_later_writes() {
        let dag = dag();
        let before = dag.put(DagNode::leaf(b"before".to_vec())).await.unwrap();

        let snapshot = dag.snapshot().await.unwrap();
        let after = dag.put(DagNode::leaf(b"after".to_vec())).await.unwrap();

        assert!(snapshot.has(&before).await.unwrap());
        assert!(!snapshot.has(&after).await.unwrap());
        assert!(dag.has(&after).await.unwrap());
    }
}
