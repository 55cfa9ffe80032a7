//! The configurable test node
//!
//! Wires every in-memory fake together behind the `Node` collaborator
//! interface. Online, mount, and fallback-failure state are runtime-togglable
//! so tests can exercise the policy gates against live status changes.

use async_trait::async_trait;
use ed25519_dalek::SigningKey;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use holt_core::{
    Block, BlockService, BlockStore, CancelScope, DagService, Exchange, GcBlockStore, HoltError,
    NameSystem, Node, PeerHost, PeerId, Peerstore, Pinner, PubSub, RecordValidator, Repo, Result,
    Routing,
};

use crate::dag::MemDagService;
use crate::exchange::MemExchange;
use crate::naming::{Ed25519RecordValidator, MemNameSystem};
use crate::net::{MemPeerHost, MemPeerstore, MemRouting};
use crate::pins::MemPinner;
use crate::pubsub::MemPubSub;
use crate::repo::MemRepo;
use crate::stores::{MemBlockService, MemBlockStore};

/// A complete in-memory node for facade tests
pub struct TestNode {
    identity: PeerId,
    signing_key: Arc<SigningKey>,
    scope: CancelScope,

    repo: Arc<MemRepo>,
    blocks: Arc<MemBlockStore>,
    block_service: Arc<MemBlockService>,
    dag: Arc<MemDagService>,
    pinner: Arc<MemPinner>,

    peerstore: Arc<MemPeerstore>,
    peer_host: Arc<MemPeerHost>,
    namesys: Arc<MemNameSystem>,
    record_validator: Arc<Ed25519RecordValidator>,
    exchange: Arc<MemExchange>,

    routing: Arc<MemRouting>,
    pubsub: Arc<MemPubSub>,

    online: AtomicBool,
    mount_active: AtomicBool,
    fail_offline_setup: AtomicBool,
    offline_routing_ready: AtomicBool,
    offline_routing_installs: AtomicUsize,
}

impl TestNode {
    /// Start configuring a test node
    pub fn builder() -> TestNodeBuilder {
        TestNodeBuilder::default()
    }

    /// Toggle the node's online status
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    /// Toggle whether the name mount is active
    pub fn set_mount_active(&self, active: bool) {
        self.mount_active.store(active, Ordering::SeqCst);
    }

    /// Make the next offline-routing setup attempts fail
    pub fn set_fail_offline_setup(&self, fail: bool) {
        self.fail_offline_setup.store(fail, Ordering::SeqCst);
    }

    /// How many times the offline routing fallback was actually installed
    ///
    /// Stays at one no matter how often setup is re-requested; tests use it
    /// to observe idempotency.
    pub fn offline_routing_installs(&self) -> usize {
        self.offline_routing_installs.load(Ordering::SeqCst)
    }

    /// Make a block fetchable from the fake remote side of the exchange
    pub fn seed_remote_block(&self, block: Block) {
        self.exchange.seed_remote(block);
    }

    /// The routing fake, for seeding providers and peer addresses
    pub fn routing_handle(&self) -> &MemRouting {
        &self.routing
    }

    /// The pub/sub fake, for seeding topic participants
    pub fn pubsub_handle(&self) -> &MemPubSub {
        &self.pubsub
    }
}

#[async_trait]
impl Node for TestNode {
    fn identity(&self) -> PeerId {
        self.identity
    }

    fn signing_key(&self) -> Arc<SigningKey> {
        self.signing_key.clone()
    }

    fn repo(&self) -> Arc<dyn Repo> {
        self.repo.clone()
    }

    fn base_blocks(&self) -> Arc<dyn BlockStore> {
        self.blocks.clone()
    }

    fn gc_blocks(&self) -> Arc<dyn GcBlockStore> {
        self.blocks.clone()
    }

    fn block_service(&self) -> Arc<dyn BlockService> {
        self.block_service.clone()
    }

    fn dag(&self) -> Arc<dyn DagService> {
        self.dag.clone()
    }

    fn pinner(&self) -> Arc<dyn Pinner> {
        self.pinner.clone()
    }

    fn peerstore(&self) -> Arc<dyn Peerstore> {
        self.peerstore.clone()
    }

    fn peer_host(&self) -> Arc<dyn PeerHost> {
        self.peer_host.clone()
    }

    fn name_system(&self) -> Arc<dyn NameSystem> {
        self.namesys.clone()
    }

    fn record_validator(&self) -> Arc<dyn RecordValidator> {
        self.record_validator.clone()
    }

    fn exchange(&self) -> Arc<dyn Exchange> {
        self.exchange.clone()
    }

    fn routing(&self) -> Arc<dyn Routing> {
        self.routing.clone()
    }

    fn pubsub(&self) -> Arc<dyn PubSub> {
        self.pubsub.clone()
    }

    fn scope(&self) -> CancelScope {
        self.scope.clone()
    }

    fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    async fn setup_offline_routing(&self) -> Result<()> {
        if self.fail_offline_setup.load(Ordering::SeqCst) {
            return Err(HoltError::offline_fallback(
                "offline routing unavailable for this repo",
            ));
        }
        // First caller wins the install; everyone else sees it already done.
        if !self.offline_routing_ready.swap(true, Ordering::SeqCst) {
            self.offline_routing_installs.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    fn name_mount_active(&self) -> bool {
        self.mount_active.load(Ordering::SeqCst)
    }
}

impl std::fmt::Debug for TestNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestNode")
            .field("identity", &self.identity)
            .field("online", &self.is_online())
            .field("mount_active", &self.name_mount_active())
            .finish()
    }
}

/// Builder for [`TestNode`]
#[derive(Debug, Clone)]
pub struct TestNodeBuilder {
    seed: u64,
    online: bool,
    mount_active: bool,
    fail_offline_setup: bool,
}

impl Default for TestNodeBuilder {
    fn default() -> Self {
        Self {
            seed: 42,
            online: true,
            mount_active: false,
            fail_offline_setup: false,
        }
    }
}

impl TestNodeBuilder {
    /// Deterministic seed for the node's signing key
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Initial online status
    pub fn online(mut self, online: bool) -> Self {
        self.online = online;
        self
    }

    /// Initial name-mount status
    pub fn mount_active(mut self, active: bool) -> Self {
        self.mount_active = active;
        self
    }

    /// Whether offline-routing setup should fail
    pub fn fail_offline_setup(mut self, fail: bool) -> Self {
        self.fail_offline_setup = fail;
        self
    }

    /// Assemble the node
    pub fn build(self) -> Arc<TestNode> {
        let signing_key = SigningKey::generate(&mut StdRng::seed_from_u64(self.seed));
        let identity = PeerId::from_verifying_key(&signing_key.verifying_key());

        let blocks = Arc::new(MemBlockStore::new());
        let exchange = Arc::new(MemExchange::new());
        let block_service = Arc::new(MemBlockService::new(blocks.clone(), exchange.clone()));
        let local_addr = format!("/memory/{identity}");

        Arc::new(TestNode {
            identity,
            signing_key: Arc::new(signing_key),
            scope: CancelScope::root(),

            repo: Arc::new(MemRepo::new()),
            blocks: blocks.clone(),
            block_service,
            dag: Arc::new(MemDagService::new(blocks)),
            pinner: Arc::new(MemPinner::new()),

            peerstore: Arc::new(MemPeerstore::new()),
            peer_host: Arc::new(MemPeerHost::new(vec![local_addr])),
            namesys: Arc::new(MemNameSystem::new()),
            record_validator: Arc::new(Ed25519RecordValidator),
            exchange,

            routing: Arc::new(MemRouting::new()),
            pubsub: Arc::new(MemPubSub::new(identity)),

            online: AtomicBool::new(self.online),
            mount_active: AtomicBool::new(self.mount_active),
            fail_offline_setup: AtomicBool::new(self.fail_offline_setup),
            offline_routing_ready: AtomicBool::new(false),
            offline_routing_installs: AtomicUsize::new(0),
        })
    }
}
