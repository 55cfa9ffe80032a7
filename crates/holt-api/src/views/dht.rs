//! Routing/DHT capability
//!
//! Every operation here depends on peer routing, so each one consults the
//! routing gate before touching the routing handle.

use holt_core::{BlockStore, Cid, Exchange, HoltError, PeerId, Result, Routing};

use crate::api::NodeApi;

/// Providers returned per query unless the caller asks otherwise
const DEFAULT_PROVIDER_LIMIT: usize = 20;

/// Content and peer routing
#[derive(Clone, Copy)]
pub struct DhtApi<'a>(pub(crate) &'a NodeApi);

impl DhtApi<'_> {
    /// Announce that this node provides a cid
    ///
    /// The block must be stored locally; announcing content the node cannot
    /// serve would poison the routing tables. The block is also offered to
    /// the exchange so peers already waiting on it get it without a lookup.
    pub async fn provide(&self, cid: &Cid, allow_offline: bool) -> Result<()> {
        self.0.routing_gate.check(allow_offline).await?;
        let block = self.0.base_blocks.get(cid).await?.ok_or_else(|| {
            HoltError::not_found(format!("cannot provide {cid}: not stored locally"))
        })?;
        self.0.routing.provide(cid).await?;
        self.0.exchange.announce(&block).await
    }

    /// Find peers providing a cid
    pub async fn find_providers(&self, cid: &Cid, allow_offline: bool) -> Result<Vec<PeerId>> {
        self.0.routing_gate.check(allow_offline).await?;
        self.0
            .routing
            .find_providers(cid, DEFAULT_PROVIDER_LIMIT)
            .await
    }

    /// Find the known addresses of a peer
    pub async fn find_peer(&self, peer: &PeerId, allow_offline: bool) -> Result<Vec<String>> {
        self.0.routing_gate.check(allow_offline).await?;
        self.0.routing.find_peer(peer).await
    }
}
