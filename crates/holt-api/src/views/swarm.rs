//! Peer swarm capability
//!
//! Dialing and hanging up require live routing; the read-only queries work
//! regardless of online status.

use holt_core::{PeerHost, PeerId, Peerstore, Result};

use crate::api::NodeApi;

/// Connection management over the peer host
#[derive(Clone, Copy)]
pub struct SwarmApi<'a>(pub(crate) &'a NodeApi);

impl SwarmApi<'_> {
    /// Dial an address and remember it for the connected peer
    pub async fn connect(&self, addr: &str) -> Result<PeerId> {
        self.0.routing_gate.check(false).await?;
        let peer = self.0.peer_host.connect(addr).await?;
        self.0.peerstore.add_addr(&peer, addr).await?;
        Ok(peer)
    }

    /// Close the connection at an address
    pub async fn disconnect(&self, addr: &str) -> Result<()> {
        self.0.routing_gate.check(false).await?;
        self.0.peer_host.disconnect(addr).await
    }

    /// Currently connected peers
    pub async fn peers(&self) -> Result<Vec<PeerId>> {
        self.0.peer_host.peers().await
    }

    /// Addresses this node listens on
    pub async fn local_addrs(&self) -> Result<Vec<String>> {
        self.0.peer_host.local_addrs().await
    }

    /// Addresses known for a peer
    pub async fn known_addrs(&self, peer: &PeerId) -> Result<Vec<String>> {
        self.0.peerstore.addrs(peer).await
    }
}
