//! Pure collaborator interfaces
//!
//! Trait signatures for every subsystem the facade composes. This module
//! contains no implementations: production nodes wire in their own
//! subsystems, and `holt-testkit` provides in-memory fakes for tests. The
//! facade layer treats all of these as opaque, internally thread-safe
//! services — it composes them but never serializes access itself.

mod block;
mod dag;
mod exchange;
mod name;
mod node;
mod pin;
mod pubsub;
mod repo;
mod routing;
mod swarm;

pub use block::{BlockService, BlockStore, GcBlockStore};
pub use dag::{DagRead, DagService};
pub use exchange::Exchange;
pub use name::{NameSystem, RecordValidator};
pub use node::Node;
pub use pin::Pinner;
pub use pubsub::{PubSub, PubSubMessage, Subscription};
pub use repo::Repo;
pub use routing::Routing;
pub use swarm::{PeerHost, Peerstore};
