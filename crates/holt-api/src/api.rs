//! Facade construction and capability accessors
//!
//! [`NodeApi`] bundles every subsystem handle of a running node behind one
//! immutable value. Accessors re-type a borrow of that value as a narrow
//! per-domain view; nothing is copied, so an operation performed through one
//! view is visible through all others.

use std::sync::Arc;

use ed25519_dalek::SigningKey;

use holt_core::{
    BlockService, BlockStore, CancelScope, DagService, Exchange, GcBlockStore, NameSystem, Node,
    PeerHost, PeerId, Peerstore, Pinner, PubSub, RecordValidator, Repo, Result, Routing,
};

use crate::gates::{PublishGate, RoutingGate};
use crate::options::ApiOptions;
use crate::session::SessionDag;
use crate::views::{
    BlockApi, DagApi, DhtApi, FilesApi, KeyApi, NameApi, ObjectApi, PinApi, PubSubApi, SwarmApi,
};

/// The unified API over one running node
///
/// Constructed once when the node becomes ready. All fields are captured at
/// construction and never mutated; behavior changes (session isolation) are
/// expressed by deriving a new value that shares every field except the ones
/// explicitly replaced. The policy gates hold the live node reference, so
/// online/offline and mount status are read at call time.
#[derive(Clone)]
pub struct NodeApi {
    pub(crate) scope: CancelScope,

    pub(crate) identity: PeerId,
    pub(crate) signing_key: Arc<SigningKey>,

    pub(crate) repo: Arc<dyn Repo>,
    pub(crate) base_blocks: Arc<dyn BlockStore>,
    pub(crate) gc_blocks: Arc<dyn GcBlockStore>,
    pub(crate) blocks: Arc<dyn BlockService>,
    pub(crate) dag: Arc<dyn DagService>,
    pub(crate) pinning: Arc<dyn Pinner>,

    pub(crate) peerstore: Arc<dyn Peerstore>,
    pub(crate) peer_host: Arc<dyn PeerHost>,
    pub(crate) namesys: Arc<dyn NameSystem>,
    pub(crate) record_validator: Arc<dyn RecordValidator>,
    pub(crate) exchange: Arc<dyn Exchange>,

    pub(crate) routing: Arc<dyn Routing>,
    pub(crate) pubsub: Arc<dyn PubSub>,

    pub(crate) routing_gate: RoutingGate,
    pub(crate) publish_gate: PublishGate,
}

impl NodeApi {
    /// Build the facade from a running node
    ///
    /// Pure given the node reference: reads already-initialized handles and
    /// performs no I/O. Fails only on an unrecognized or mistyped option;
    /// every other invalid state surfaces when a gated operation is
    /// attempted.
    pub fn new(node: Arc<dyn Node>, options: ApiOptions) -> Result<Self> {
        let resolved = options.resolve()?;

        let api = Self {
            scope: node.scope(),

            identity: node.identity(),
            signing_key: node.signing_key(),

            repo: node.repo(),
            base_blocks: node.base_blocks(),
            gc_blocks: node.gc_blocks(),
            blocks: node.block_service(),
            dag: node.dag(),
            pinning: node.pinner(),

            peerstore: node.peerstore(),
            peer_host: node.peer_host(),
            namesys: node.name_system(),
            record_validator: node.record_validator(),
            exchange: node.exchange(),

            routing: node.routing(),
            pubsub: node.pubsub(),

            routing_gate: RoutingGate::new(node.clone(), resolved.force_offline),
            publish_gate: PublishGate::new(node),
        };

        tracing::debug!(
            identity = %api.identity,
            force_offline = resolved.force_offline,
            "constructed node api"
        );
        Ok(api)
    }

    /// The node's peer identity
    pub fn identity(&self) -> PeerId {
        self.identity
    }

    /// The cancellation scope bounding this facade's operations
    pub fn scope(&self) -> &CancelScope {
        &self.scope
    }

    /// Content/files capability
    pub fn files(&self) -> FilesApi<'_> {
        FilesApi(self)
    }

    /// Raw block capability
    pub fn block(&self) -> BlockApi<'_> {
        BlockApi(self)
    }

    /// Merkle-DAG capability
    pub fn dag(&self) -> DagApi<'_> {
        DagApi(self)
    }

    /// Naming capability
    pub fn name(&self) -> NameApi<'_> {
        NameApi(self)
    }

    /// Key capability
    pub fn key(&self) -> KeyApi<'_> {
        KeyApi(self)
    }

    /// Structured object capability
    pub fn object(&self) -> ObjectApi<'_> {
        ObjectApi(self)
    }

    /// Pin capability
    pub fn pin(&self) -> PinApi<'_> {
        PinApi(self)
    }

    /// Routing/DHT capability
    pub fn dht(&self) -> DhtApi<'_> {
        DhtApi(self)
    }

    /// Peer swarm capability
    pub fn swarm(&self) -> SwarmApi<'_> {
        SwarmApi(self)
    }

    /// Pub/sub capability
    pub fn pubsub(&self) -> PubSubApi<'_> {
        PubSubApi(self)
    }

    /// Derive a session facade bound to a cancellation scope
    ///
    /// The result shares every field with this facade except the DAG handle,
    /// which is replaced by a read-only view over a snapshot frozen now.
    /// Reads through the session fail promptly once the scope is cancelled;
    /// writes through it fail deterministically. Deriving a session from a
    /// session composes: both scopes bound the nested session's reads, the
    /// innermost checked first.
    pub async fn derive_session(&self, scope: CancelScope) -> Result<Self> {
        let snapshot = self.dag.snapshot().await?;
        let mut session = self.clone();
        session.dag = Arc::new(SessionDag::new(snapshot, scope));
        Ok(session)
    }
}

impl std::fmt::Debug for NodeApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeApi")
            .field("identity", &self.identity)
            .field("routing_gate", &self.routing_gate)
            .finish()
    }
}
