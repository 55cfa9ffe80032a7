//! In-memory routing, peerstore, and peer host

use async_trait::async_trait;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

use holt_core::{Cid, HoltError, PeerHost, PeerId, Peerstore, Result, Routing};

/// Routing backed by seedable maps
#[derive(Debug, Default)]
pub struct MemRouting {
    providers: RwLock<HashMap<Cid, Vec<PeerId>>>,
    peer_addrs: RwLock<HashMap<PeerId, Vec<String>>>,
    values: RwLock<HashMap<String, Vec<u8>>>,
    local: RwLock<Vec<Cid>>,
}

impl MemRouting {
    /// Empty routing tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a provider for a cid
    pub fn add_provider(&self, cid: Cid, peer: PeerId) {
        self.providers.write().entry(cid).or_default().push(peer);
    }

    /// Seed an address for a peer
    pub fn add_peer_addr(&self, peer: PeerId, addr: impl Into<String>) {
        self.peer_addrs
            .write()
            .entry(peer)
            .or_default()
            .push(addr.into());
    }

    /// Cids this node has announced
    pub fn provided(&self) -> Vec<Cid> {
        self.local.read().clone()
    }
}

#[async_trait]
impl Routing for MemRouting {
    async fn provide(&self, cid: &Cid) -> Result<()> {
        self.local.write().push(*cid);
        Ok(())
    }

    async fn find_providers(&self, cid: &Cid, limit: usize) -> Result<Vec<PeerId>> {
        let mut found = self.providers.read().get(cid).cloned().unwrap_or_default();
        found.truncate(limit);
        Ok(found)
    }

    async fn find_peer(&self, peer: &PeerId) -> Result<Vec<String>> {
        self.peer_addrs
            .read()
            .get(peer)
            .cloned()
            .ok_or_else(|| HoltError::routing(format!("peer {peer} not found")))
    }

    async fn get_value(&self, key: &str) -> Result<Vec<u8>> {
        self.values
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| HoltError::not_found(format!("no routing value for '{key}'")))
    }

    async fn put_value(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }
}

/// Peerstore backed by a map
#[derive(Debug, Default)]
pub struct MemPeerstore {
    addrs: RwLock<HashMap<PeerId, Vec<String>>>,
}

impl MemPeerstore {
    /// Empty peerstore
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Peerstore for MemPeerstore {
    async fn add_addr(&self, peer: &PeerId, addr: &str) -> Result<()> {
        let mut addrs = self.addrs.write();
        let known = addrs.entry(*peer).or_default();
        if !known.iter().any(|a| a == addr) {
            known.push(addr.to_string());
        }
        Ok(())
    }

    async fn addrs(&self, peer: &PeerId) -> Result<Vec<String>> {
        Ok(self.addrs.read().get(peer).cloned().unwrap_or_default())
    }
}

/// Peer host where dialing an address deterministically yields a peer
#[derive(Debug, Default)]
pub struct MemPeerHost {
    connected: RwLock<HashMap<String, PeerId>>,
    local_addrs: Vec<String>,
}

impl MemPeerHost {
    /// Host listening on the given addresses
    pub fn new(local_addrs: Vec<String>) -> Self {
        Self {
            connected: RwLock::new(HashMap::new()),
            local_addrs,
        }
    }

    /// The peer identity a dial of `addr` will produce
    pub fn peer_for_addr(addr: &str) -> PeerId {
        let mut hasher = Sha256::new();
        hasher.update(b"holt-test-peer");
        hasher.update(addr.as_bytes());
        PeerId::from_bytes(hasher.finalize().into())
    }
}

#[async_trait]
impl PeerHost for MemPeerHost {
    async fn connect(&self, addr: &str) -> Result<PeerId> {
        let peer = Self::peer_for_addr(addr);
        self.connected.write().insert(addr.to_string(), peer);
        Ok(peer)
    }

    async fn disconnect(&self, addr: &str) -> Result<()> {
        if self.connected.write().remove(addr).is_none() {
            return Err(HoltError::not_found(format!("not connected to {addr}")));
        }
        Ok(())
    }

    async fn peers(&self) -> Result<Vec<PeerId>> {
        Ok(self.connected.read().values().copied().collect())
    }

    async fn local_addrs(&self) -> Result<Vec<String>> {
        Ok(self.local_addrs.clone())
    }
}
