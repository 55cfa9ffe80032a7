//! Session-scoped, read-only DAG views
//!
//! A [`SessionDag`] is the DAG handle installed by
//! [`crate::NodeApi::derive_session`]: a snapshot frozen at derivation time,
//! readable until the session's cancellation scope fires, and never writable.
//! Writes failing here are an implementation error in the caller, not a
//! runtime race, so they fail deterministically with `ReadOnly`.

use async_trait::async_trait;
use std::sync::Arc;

use holt_core::{CancelScope, Cid, DagNode, DagRead, DagService, HoltError, Result};

/// Read-only snapshot DAG bound to a cancellation scope
pub(crate) struct SessionDag {
    snapshot: Arc<dyn DagRead>,
    scope: CancelScope,
}

impl SessionDag {
    pub(crate) fn new(snapshot: Arc<dyn DagRead>, scope: CancelScope) -> Self {
        Self { snapshot, scope }
    }
}

#[async_trait]
impl DagRead for SessionDag {
    async fn get(&self, cid: &Cid) -> Result<DagNode> {
        tokio::select! {
            biased;
            _ = self.scope.cancelled() => {
                Err(HoltError::cancelled(format!("session dag read of {cid}")))
            }
            result = self.snapshot.get(cid) => result,
        }
    }

    async fn has(&self, cid: &Cid) -> Result<bool> {
        tokio::select! {
            biased;
            _ = self.scope.cancelled() => {
                Err(HoltError::cancelled(format!("session dag check of {cid}")))
            }
            result = self.snapshot.has(cid) => result,
        }
    }
}

#[async_trait]
impl DagService for SessionDag {
    async fn put(&self, _node: DagNode) -> Result<Cid> {
        Err(HoltError::read_only("session dag views reject writes"))
    }

    async fn remove(&self, _cid: &Cid) -> Result<bool> {
        Err(HoltError::read_only("session dag views reject writes"))
    }

    async fn snapshot(&self) -> Result<Arc<dyn DagRead>> {
        // Already frozen. Re-wrap with this session's scope so a session
        // derived from this one stays bounded by its parent: the nested view
        // checks its own scope, then this one.
        Ok(Arc::new(SessionDag {
            snapshot: self.snapshot.clone(),
            scope: self.scope.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// A read that never completes, standing in for slow remote fetches.
    struct HangingRead;

    #[async_trait]
    impl DagRead for HangingRead {
        async fn get(&self, _cid: &Cid) -> Result<DagNode> {
            std::future::pending().await
        }

        async fn has(&self, _cid: &Cid) -> Result<bool> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn in_flight_read_fails_on_cancel() {
        let scope = CancelScope::root();
        let dag = SessionDag::new(Arc::new(HangingRead), scope.clone());

        let reader = tokio::spawn(async move { dag.get(&Cid::for_data(b"stuck")).await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        scope.cancel();

        let result = tokio::time::timeout(Duration::from_secs(1), reader)
            .await
            .expect("read must fail promptly after cancel")
            .expect("reader task must not panic");
        assert!(matches!(result, Err(HoltError::Cancelled { .. })));
    }

    #[tokio::test]
    async fn already_cancelled_scope_fails_reads_immediately() {
        let scope = CancelScope::root();
        scope.cancel();
        let dag = SessionDag::new(Arc::new(HangingRead), scope);

        let result = tokio::time::timeout(
            Duration::from_millis(100),
            dag.get(&Cid::for_data(b"stuck")),
        )
        .await
        .expect("cancelled scope must short-circuit the read");
        assert!(matches!(result, Err(HoltError::Cancelled { .. })));
    }
}
