//! Peer swarm interfaces

use async_trait::async_trait;

use crate::errors::Result;
use crate::identifiers::PeerId;

/// Known addresses for peers
#[async_trait]
pub trait Peerstore: Send + Sync {
    /// Record an address for a peer
    async fn add_addr(&self, peer: &PeerId, addr: &str) -> Result<()>;

    /// Addresses known for a peer
    async fn addrs(&self, peer: &PeerId) -> Result<Vec<String>>;
}

/// The node's live connection set
#[async_trait]
pub trait PeerHost: Send + Sync {
    /// Dial an address, returning the connected peer's identity
    async fn connect(&self, addr: &str) -> Result<PeerId>;

    /// Close the connection at an address
    async fn disconnect(&self, addr: &str) -> Result<()>;

    /// Currently connected peers
    async fn peers(&self) -> Result<Vec<PeerId>>;

    /// Addresses this node listens on
    async fn local_addrs(&self) -> Result<Vec<String>>;
}
