//! Content/files capability
//!
//! Files are stored as DAG subgraphs: content at or below the chunk size is
//! a single leaf node; larger content becomes a root node linking ordered
//! chunk leaves. Reads derive a session so a concurrent writer can never
//! tear the traversal.

use holt_core::{Cid, DagLink, DagNode, DagRead, DagService, Result};

use crate::api::NodeApi;

/// Chunk size for file content
const CHUNK_SIZE: usize = 256 * 1024;

/// File-level access to content-addressed data
#[derive(Clone, Copy)]
pub struct FilesApi<'a>(pub(crate) &'a NodeApi);

impl FilesApi<'_> {
    /// Store content, returning the cid of its root node
    pub async fn add(&self, data: &[u8]) -> Result<Cid> {
        if data.len() <= CHUNK_SIZE {
            return self.0.dag.put(DagNode::leaf(data.to_vec())).await;
        }

        let mut links = Vec::new();
        for (index, chunk) in data.chunks(CHUNK_SIZE).enumerate() {
            let cid = self.0.dag.put(DagNode::leaf(chunk.to_vec())).await?;
            links.push(DagLink::new(format!("chunk-{index}"), cid));
        }
        self.0.dag.put(DagNode::new(Vec::new(), links)).await
    }

    /// Read content back as one byte vector
    pub async fn cat(&self, cid: &Cid) -> Result<Vec<u8>> {
        let session = self.0.derive_session(self.0.scope.child()).await?;
        let root = session.dag.get(cid).await?;
        if root.links.is_empty() {
            return Ok(root.data);
        }

        let mut out = Vec::with_capacity(root.links.len() * CHUNK_SIZE);
        for link in &root.links {
            let chunk = session.dag.get(&link.cid).await?;
            out.extend_from_slice(&chunk.data);
        }
        Ok(out)
    }

    /// List the links under a root node
    pub async fn ls(&self, cid: &Cid) -> Result<Vec<DagLink>> {
        let session = self.0.derive_session(self.0.scope.child()).await?;
        Ok(session.dag.get(cid).await?.links)
    }
}
