//! Merkle-DAG capability

use holt_core::{Cid, DagNode, DagRead, DagService, HoltError, Result};

use crate::api::NodeApi;

/// Direct DAG node access plus path resolution
#[derive(Clone, Copy)]
pub struct DagApi<'a>(pub(crate) &'a NodeApi);

impl DagApi<'_> {
    /// Store a node
    pub async fn put(&self, node: DagNode) -> Result<Cid> {
        self.0.dag.put(node).await
    }

    /// Fetch a node
    pub async fn get(&self, cid: &Cid) -> Result<DagNode> {
        self.0.dag.get(cid).await
    }

    /// Resolve a path of the form `<cid>/<link>/<link>` to its final cid
    ///
    /// A multi-step read: the whole walk runs against one session snapshot,
    /// so a concurrent writer cannot swap a link mid-resolution.
    pub async fn resolve(&self, path: &str) -> Result<Cid> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let root: Cid = segments
            .next()
            .ok_or_else(|| HoltError::invalid_input("empty dag path"))?
            .parse()?;

        let session = self.0.derive_session(self.0.scope.child()).await?;
        let mut current = root;
        for segment in segments {
            let node = session.dag.get(&current).await?;
            let link = node.link(segment).ok_or_else(|| {
                HoltError::not_found(format!("no link named '{segment}' under {current}"))
            })?;
            current = link.cid;
        }
        Ok(current)
    }
}
