//! Merkle-DAG service interfaces
//!
//! [`DagRead`] is the read half on its own so sessions can hand out
//! snapshot-isolated views that structurally cannot write.

use async_trait::async_trait;
use std::sync::Arc;

use crate::content::Cid;
use crate::dag::DagNode;
use crate::errors::Result;

/// Read-only DAG access
#[async_trait]
pub trait DagRead: Send + Sync {
    /// Fetch a node by cid
    async fn get(&self, cid: &Cid) -> Result<DagNode>;

    /// Whether a node is present
    async fn has(&self, cid: &Cid) -> Result<bool>;
}

/// Full DAG access
#[async_trait]
pub trait DagService: DagRead {
    /// Store a node, returning its cid
    async fn put(&self, node: DagNode) -> Result<Cid>;

    /// Remove a node, returning whether it was present
    async fn remove(&self, cid: &Cid) -> Result<bool>;

    /// Freeze the current state into a read-consistent view
    ///
    /// The returned view must not observe writes issued after this call.
    async fn snapshot(&self) -> Result<Arc<dyn DagRead>>;
}
