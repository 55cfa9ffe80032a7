//! Pin capability

use std::collections::HashSet;

use holt_core::{Cid, DagRead, PinEntry, PinKind, Pinner, Result};

use crate::api::NodeApi;

/// Pin add/remove/list over the node's pin set
#[derive(Clone, Copy)]
pub struct PinApi<'a>(pub(crate) &'a NodeApi);

impl PinApi<'_> {
    /// Pin a cid
    ///
    /// A recursive pin walks the full subgraph under one session snapshot
    /// first, so a pin only succeeds when everything it promises to protect
    /// is actually present.
    pub async fn add(&self, cid: &Cid, kind: PinKind) -> Result<()> {
        match kind {
            PinKind::Direct => {
                self.0.dag.get(cid).await?;
            }
            PinKind::Recursive => {
                let session = self.0.derive_session(self.0.scope.child()).await?;
                let mut stack = vec![*cid];
                let mut seen = HashSet::new();
                while let Some(next) = stack.pop() {
                    if !seen.insert(next) {
                        continue;
                    }
                    let node = session.dag.get(&next).await?;
                    stack.extend(node.links.iter().map(|l| l.cid));
                }
            }
        }
        self.0.pinning.pin(cid, kind).await
    }

    /// Remove a pin, returning whether it was present
    pub async fn rm(&self, cid: &Cid) -> Result<bool> {
        self.0.pinning.unpin(cid).await
    }

    /// List all pins
    pub async fn ls(&self) -> Result<Vec<PinEntry>> {
        self.0.pinning.ls().await
    }

    /// Whether a cid is pinned
    pub async fn is_pinned(&self, cid: &Cid) -> Result<bool> {
        self.0.pinning.is_pinned(cid).await
    }
}
