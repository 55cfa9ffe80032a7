//! In-memory pub/sub transport

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tokio::sync::mpsc;

use holt_core::{PeerId, PubSub, PubSubMessage, Result, Subscription};

const CHANNEL_CAPACITY: usize = 64;

/// Pub/sub where published messages loop back to local subscribers
#[derive(Debug)]
pub struct MemPubSub {
    local: PeerId,
    subscribers: RwLock<HashMap<String, Vec<mpsc::Sender<PubSubMessage>>>>,
    remote_peers: RwLock<HashMap<String, Vec<PeerId>>>,
}

impl MemPubSub {
    /// Transport publishing as the given local peer
    pub fn new(local: PeerId) -> Self {
        Self {
            local,
            subscribers: RwLock::new(HashMap::new()),
            remote_peers: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a remote participant for a topic
    pub fn add_topic_peer(&self, topic: impl Into<String>, peer: PeerId) {
        self.remote_peers
            .write()
            .entry(topic.into())
            .or_default()
            .push(peer);
    }
}

#[async_trait]
impl PubSub for MemPubSub {
    async fn publish(&self, topic: &str, data: Vec<u8>) -> Result<()> {
        let message = PubSubMessage {
            from: self.local,
            topic: topic.to_string(),
            data,
        };
        // Clone senders out of the lock before awaiting on them.
        let senders: Vec<_> = self
            .subscribers
            .read()
            .get(topic)
            .map(|s| s.to_vec())
            .unwrap_or_default();

        let mut dead = false;
        for sender in &senders {
            if sender.send(message.clone()).await.is_err() {
                dead = true;
            }
        }
        if dead {
            self.subscribers
                .write()
                .entry(topic.to_string())
                .or_default()
                .retain(|s| !s.is_closed());
        }
        Ok(())
    }

    async fn subscribe(&self, topic: &str) -> Result<Subscription> {
        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
        self.subscribers
            .write()
            .entry(topic.to_string())
            .or_default()
            .push(sender);
        Ok(Subscription::new(topic, receiver))
    }

    async fn topics(&self) -> Result<Vec<String>> {
        Ok(self
            .subscribers
            .read()
            .iter()
            .filter(|(_, senders)| senders.iter().any(|s| !s.is_closed()))
            .map(|(topic, _)| topic.clone())
            .collect())
    }

    async fn topic_peers(&self, topic: &str) -> Result<Vec<PeerId>> {
        Ok(self
            .remote_peers
            .read()
            .get(topic)
            .cloned()
            .unwrap_or_default())
    }
}
