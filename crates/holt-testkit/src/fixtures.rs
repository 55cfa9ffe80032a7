//! Common fixtures for facade tests

use std::sync::Arc;

use holt_core::{Cid, DagLink, DagNode, DagService, Result};

use crate::node::TestNode;

/// Install a tracing subscriber for test output
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// An online node with default configuration
pub fn test_node() -> Arc<TestNode> {
    TestNode::builder().build()
}

/// An offline node with default configuration
pub fn offline_node() -> Arc<TestNode> {
    TestNode::builder().online(false).build()
}

/// Store a linked chain of nodes, returning cids leaf-first
///
/// Each node links to the previous one under the name `"next"`, so the last
/// returned cid is the root of a `depth`-deep path.
pub async fn store_chain(dag: &dyn DagService, depth: usize) -> Result<Vec<Cid>> {
    let mut cids = Vec::with_capacity(depth);
    let mut previous: Option<Cid> = None;
    for level in 0..depth {
        let links = previous
            .map(|cid| vec![DagLink::new("next", cid)])
            .unwrap_or_default();
        let node = DagNode::new(format!("level-{level}").into_bytes(), links);
        let cid = dag.put(node).await?;
        cids.push(cid);
        previous = Some(cid);
    }
    Ok(cids)
}
