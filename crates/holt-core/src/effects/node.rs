//! The node collaborator
//!
//! A running node exposes its internal subsystem handles through this trait;
//! the facade is constructed from it and never owns the subsystems' lifecycle.
//! Status queries (`is_online`, `name_mount_active`) must reflect live state
//! at call time — policy gates read them on every evaluation.

use async_trait::async_trait;
use ed25519_dalek::SigningKey;
use std::sync::Arc;

use crate::errors::Result;
use crate::identifiers::PeerId;
use crate::scope::CancelScope;

use super::{
    BlockService, BlockStore, DagService, Exchange, GcBlockStore, NameSystem, PeerHost, Peerstore,
    Pinner, PubSub, RecordValidator, Repo, Routing,
};

/// A running node's internal state, as seen by the facade
#[async_trait]
pub trait Node: Send + Sync {
    /// The node's peer identity
    fn identity(&self) -> PeerId;

    /// The node's signing key
    ///
    /// Sensitive; only the naming and key capability surfaces may use it.
    fn signing_key(&self) -> Arc<SigningKey>;

    /// On-disk repository handle
    fn repo(&self) -> Arc<dyn Repo>;

    /// Write-enabled base block storage
    fn base_blocks(&self) -> Arc<dyn BlockStore>;

    /// Garbage-collectable block storage
    fn gc_blocks(&self) -> Arc<dyn GcBlockStore>;

    /// Block service combining local storage with the exchange
    fn block_service(&self) -> Arc<dyn BlockService>;

    /// Merkle-DAG service
    fn dag(&self) -> Arc<dyn DagService>;

    /// Pin set
    fn pinner(&self) -> Arc<dyn Pinner>;

    /// Known peer addresses
    fn peerstore(&self) -> Arc<dyn Peerstore>;

    /// Live connection set
    fn peer_host(&self) -> Arc<dyn PeerHost>;

    /// Naming system
    fn name_system(&self) -> Arc<dyn NameSystem>;

    /// Validation applied to naming records
    fn record_validator(&self) -> Arc<dyn RecordValidator>;

    /// Peer block exchange
    fn exchange(&self) -> Arc<dyn Exchange>;

    /// Peer routing / DHT
    fn routing(&self) -> Arc<dyn Routing>;

    /// Pub/sub transport
    fn pubsub(&self) -> Arc<dyn PubSub>;

    /// Cancellation scope spanning the node's lifetime
    fn scope(&self) -> CancelScope;

    /// Whether the node currently has live peer routing
    fn is_online(&self) -> bool;

    /// Install a degraded, local-only routing implementation
    ///
    /// Must be idempotent: concurrent or repeated calls while offline must
    /// not corrupt routing state.
    async fn setup_offline_routing(&self) -> Result<()>;

    /// Whether the naming subsystem is currently mount-managed
    fn name_mount_active(&self) -> bool;
}
