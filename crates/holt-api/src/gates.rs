//! Routing and publish policy gates
//!
//! Both gates hold a reference to the live node rather than a captured
//! status, so every evaluation reflects the node's state at call time.
//! They mutate nothing except through the node's idempotent offline-routing
//! setup path, and are safe to invoke from concurrent callers.

use std::sync::Arc;

use holt_core::{HoltError, Node, Result};

/// Decides whether routing-dependent operations may proceed
#[derive(Clone)]
pub struct RoutingGate {
    node: Arc<dyn Node>,
    force_offline: bool,
}

impl RoutingGate {
    /// Gate over a live node; `force_offline` overrides its online status
    pub fn new(node: Arc<dyn Node>, force_offline: bool) -> Self {
        Self {
            node,
            force_offline,
        }
    }

    /// The node's effective online status as this gate sees it
    pub fn is_effectively_online(&self) -> bool {
        !self.force_offline && self.node.is_online()
    }

    /// Evaluate the gate for one routing-dependent call
    ///
    /// Online nodes pass unconditionally. Offline nodes fail with
    /// [`HoltError::Offline`] unless the caller permits degraded behavior,
    /// in which case the local-only routing fallback is installed — and its
    /// own failure is still reported to the caller.
    pub async fn check(&self, allow_offline: bool) -> Result<()> {
        if self.is_effectively_online() {
            return Ok(());
        }
        if !allow_offline {
            return Err(HoltError::Offline);
        }
        tracing::debug!("node offline, installing local-only routing fallback");
        self.node
            .setup_offline_routing()
            .await
            .map_err(|err| match err {
                HoltError::OfflineFallback { .. } => err,
                other => HoltError::offline_fallback(other.to_string()),
            })
    }
}

impl std::fmt::Debug for RoutingGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingGate")
            .field("force_offline", &self.force_offline)
            .finish()
    }
}

/// Decides whether a manual naming publish is currently allowed
///
/// Evaluated on every publish attempt; mount state is dynamic and must not
/// be cached.
#[derive(Clone)]
pub struct PublishGate {
    node: Arc<dyn Node>,
}

impl PublishGate {
    /// Gate over a live node
    pub fn new(node: Arc<dyn Node>) -> Self {
        Self { node }
    }

    /// Fail if the naming subsystem is currently mount-managed
    pub fn check(&self) -> Result<()> {
        if self.node.name_mount_active() {
            return Err(HoltError::publish_conflict(
                "cannot manually publish while the name mount is active",
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for PublishGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishGate").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holt_testkit::TestNode;

    #[tokio::test]
    async fn online_node_passes_regardless_of_flag() {
        let node = TestNode::builder().online(true).build();
        let gate = RoutingGate::new(node, false);
        assert!(gate.check(false).await.is_ok());
        assert!(gate.check(true).await.is_ok());
    }

    #[tokio::test]
    async fn offline_node_fails_without_opt_in() {
        let node = TestNode::builder().online(false).build();
        let gate = RoutingGate::new(node, false);
        assert!(matches!(gate.check(false).await, Err(HoltError::Offline)));
    }

    #[tokio::test]
    async fn offline_node_installs_fallback_on_opt_in() {
        let node = TestNode::builder().online(false).build();
        let gate = RoutingGate::new(node.clone(), false);
        assert!(gate.check(true).await.is_ok());
        assert_eq!(node.offline_routing_installs(), 1);
    }

    #[tokio::test]
    async fn fallback_setup_failure_is_reported_as_fallback_error() {
        let node = TestNode::builder()
            .online(false)
            .fail_offline_setup(true)
            .build();
        let gate = RoutingGate::new(node, false);
        assert!(matches!(
            gate.check(true).await,
            Err(HoltError::OfflineFallback { .. })
        ));
    }

    #[tokio::test]
    async fn fallback_install_is_idempotent_under_repeat_calls() {
        let node = TestNode::builder().online(false).build();
        let gate = RoutingGate::new(node.clone(), false);
        for _ in 0..5 {
            assert!(gate.check(true).await.is_ok());
        }
        assert_eq!(node.offline_routing_installs(), 1);
    }

    #[tokio::test]
    async fn force_offline_overrides_live_online_status() {
        let node = TestNode::builder().online(true).build();
        let gate = RoutingGate::new(node, true);
        assert!(matches!(gate.check(false).await, Err(HoltError::Offline)));
    }

    #[tokio::test]
    async fn gate_tracks_live_status_changes() {
        let node = TestNode::builder().online(false).build();
        let gate = RoutingGate::new(node.clone(), false);
        assert!(matches!(gate.check(false).await, Err(HoltError::Offline)));

        node.set_online(true);
        assert!(gate.check(false).await.is_ok());
    }

    #[tokio::test]
    async fn publish_gate_tracks_mount_toggles() {
        let node = TestNode::builder().mount_active(true).build();
        let gate = PublishGate::new(node.clone());
        assert!(matches!(
            gate.check(),
            Err(HoltError::PublishConflict { .. })
        ));

        node.set_mount_active(false);
        assert!(gate.check().is_ok());

        node.set_mount_active(true);
        assert!(matches!(
            gate.check(),
            Err(HoltError::PublishConflict { .. })
        ));
    }
}
