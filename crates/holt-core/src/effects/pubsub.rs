//! Publish/subscribe interface

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::errors::Result;
use crate::identifiers::{PeerId, SubscriptionId};

/// A message delivered on a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubSubMessage {
    /// Publishing peer
    pub from: PeerId,
    /// Topic the message was published on
    pub topic: String,
    /// Message payload
    pub data: Vec<u8>,
}

/// A live subscription to one topic
///
/// Dropping the subscription unsubscribes; implementations detect the closed
/// channel and drop the sender.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    topic: String,
    receiver: mpsc::Receiver<PubSubMessage>,
}

impl Subscription {
    /// Assemble a subscription around a delivery channel
    pub fn new(topic: impl Into<String>, receiver: mpsc::Receiver<PubSubMessage>) -> Self {
        Self {
            id: SubscriptionId::new(),
            topic: topic.into(),
            receiver,
        }
    }

    /// Subscription identifier
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Topic this subscription delivers
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Receive the next message; `None` when the topic is torn down
    pub async fn next(&mut self) -> Option<PubSubMessage> {
        self.receiver.recv().await
    }
}

impl futures::Stream for Subscription {
    type Item = PubSubMessage;

    fn poll_next(
        self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.get_mut().receiver.poll_recv(cx)
    }
}

/// The pub/sub transport
#[async_trait]
pub trait PubSub: Send + Sync {
    /// Publish a payload to a topic
    async fn publish(&self, topic: &str, data: Vec<u8>) -> Result<()>;

    /// Subscribe to a topic
    async fn subscribe(&self, topic: &str) -> Result<Subscription>;

    /// Topics with at least one local subscription
    async fn topics(&self) -> Result<Vec<String>>;

    /// Peers known to participate in a topic
    async fn topic_peers(&self, topic: &str) -> Result<Vec<PeerId>>;
}
