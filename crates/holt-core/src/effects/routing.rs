//! Peer routing / DHT interface

use async_trait::async_trait;

use crate::content::Cid;
use crate::errors::Result;
use crate::identifiers::PeerId;

/// Content and peer routing
#[async_trait]
pub trait Routing: Send + Sync {
    /// Announce that this node can provide a cid
    async fn provide(&self, cid: &Cid) -> Result<()>;

    /// Find peers providing a cid, up to `limit`
    async fn find_providers(&self, cid: &Cid, limit: usize) -> Result<Vec<PeerId>>;

    /// Find the known addresses of a peer
    async fn find_peer(&self, peer: &PeerId) -> Result<Vec<String>>;

    /// Fetch a value from the routing system's record store
    async fn get_value(&self, key: &str) -> Result<Vec<u8>>;

    /// Store a value in the routing system's record store
    async fn put_value(&self, key: &str, value: Vec<u8>) -> Result<()>;
}
