//! Structured object capability
//!
//! Node-level DAG manipulation. Link edits are read-modify-write: the parent
//! is re-stored under a new cid, since nodes are immutable once addressed.

use holt_core::{Cid, DagLink, DagNode, DagRead, DagService, HoltError, ObjectStat, Result};

use crate::api::NodeApi;

/// Create and edit DAG nodes as structured objects
#[derive(Clone, Copy)]
pub struct ObjectApi<'a>(pub(crate) &'a NodeApi);

impl ObjectApi<'_> {
    /// Store an empty node
    pub async fn new_node(&self) -> Result<Cid> {
        self.0.dag.put(DagNode::default()).await
    }

    /// Store a node
    pub async fn put(&self, node: DagNode) -> Result<Cid> {
        self.0.dag.put(node).await
    }

    /// Fetch a node
    pub async fn get(&self, cid: &Cid) -> Result<DagNode> {
        self.0.dag.get(cid).await
    }

    /// The links under a node
    pub async fn links(&self, cid: &Cid) -> Result<Vec<DagLink>> {
        Ok(self.0.dag.get(cid).await?.links)
    }

    /// Shape information about a node
    pub async fn stat(&self, cid: &Cid) -> Result<ObjectStat> {
        let node = self.0.dag.get(cid).await?;
        let encoded = node.encode()?;
        Ok(ObjectStat {
            cid: *cid,
            num_links: node.links.len(),
            data_size: node.data.len(),
            encoded_size: encoded.len(),
        })
    }

    /// Add a named link, returning the new parent cid
    pub async fn add_link(&self, parent: &Cid, name: &str, child: &Cid) -> Result<Cid> {
        let mut node = self.0.dag.get(parent).await?;
        if node.link(name).is_some() {
            return Err(HoltError::invalid_input(format!(
                "link '{name}' already exists under {parent}"
            )));
        }
        node.links.push(DagLink::new(name, *child));
        self.0.dag.put(node).await
    }

    /// Remove a named link, returning the new parent cid
    pub async fn rm_link(&self, parent: &Cid, name: &str) -> Result<Cid> {
        let mut node = self.0.dag.get(parent).await?;
        let before = node.links.len();
        node.links.retain(|l| l.name != name);
        if node.links.len() == before {
            return Err(HoltError::not_found(format!(
                "no link named '{name}' under {parent}"
            )));
        }
        self.0.dag.put(node).await
    }
}
