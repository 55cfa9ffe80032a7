//! Pub/sub capability
//!
//! Publishing and subscribing move messages between peers, so both require
//! live routing; topic introspection is local.

use holt_core::{PeerId, PubSub, Result, Subscription};

use crate::api::NodeApi;

/// Topic-based messaging over the pub/sub transport
#[derive(Clone, Copy)]
pub struct PubSubApi<'a>(pub(crate) &'a NodeApi);

impl PubSubApi<'_> {
    /// Publish a payload to a topic
    pub async fn publish(&self, topic: &str, data: Vec<u8>) -> Result<()> {
        self.0.routing_gate.check(false).await?;
        self.0.pubsub.publish(topic, data).await
    }

    /// Subscribe to a topic
    pub async fn subscribe(&self, topic: &str) -> Result<Subscription> {
        self.0.routing_gate.check(false).await?;
        self.0.pubsub.subscribe(topic).await
    }

    /// Topics with at least one local subscription
    pub async fn ls(&self) -> Result<Vec<String>> {
        self.0.pubsub.topics().await
    }

    /// Peers known to participate in a topic
    pub async fn peers(&self, topic: &str) -> Result<Vec<PeerId>> {
        self.0.pubsub.topic_peers(topic).await
    }
}
