//! Capability views, one per subsystem domain
//!
//! Each view is a re-typed borrow of the same [`crate::NodeApi`] — created
//! and discarded per call, holding no state of its own. Views that perform
//! multi-step reads derive a session first so the whole traversal observes
//! one DAG snapshot.

mod block;
mod dag;
mod dht;
mod files;
mod key;
mod name;
mod object;
mod pin;
mod pubsub;
mod swarm;

pub use block::BlockApi;
pub use dag::DagApi;
pub use dht::DhtApi;
pub use files::FilesApi;
pub use key::KeyApi;
pub use name::NameApi;
pub use object::ObjectApi;
pub use pin::PinApi;
pub use pubsub::PubSubApi;
pub use swarm::SwarmApi;
