//! Holt API - Capability Composition over a Running Node
//!
//! This crate is the single entry point to a node's internal subsystems. It
//! exposes one facade, [`NodeApi`], constructed once per node, and presents
//! it as ten narrow capability views (content, blocks, DAG, naming, keys,
//! objects, pins, routing, swarm, pub/sub) that all share the same underlying
//! state without copying it.
//!
//! Two cross-cutting policies are enforced here and nowhere else:
//!
//! - the **routing gate**: routing-dependent operations fail on an offline
//!   node unless the caller opts into degraded local-only routing;
//! - the **publish gate**: manual name publishes are rejected while the
//!   naming subsystem is mount-managed, since both would race on the same
//!   record.
//!
//! Multi-step reads (file traversal, path resolution, recursive pinning) run
//! against a **session**: a derived facade whose DAG handle is a read-only
//! snapshot bound to a cancellation scope, so a traversal never observes
//! concurrent writes and can be cancelled as one unit.
//!
//! ```ignore
//! let api = NodeApi::new(node, ApiOptions::new())?;
//! let cid = api.files().add(b"hello holt").await?;
//! let bytes = api.files().cat(&cid).await?;
//! ```

#![forbid(unsafe_code)]

/// Facade construction and capability accessors
pub mod api;

/// Routing and publish policy gates
pub mod gates;

/// Construction-time configuration options
pub mod options;

/// Session-scoped, read-only DAG views
pub mod session;

/// Capability views, one per subsystem domain
pub mod views;

pub use api::NodeApi;
pub use gates::{PublishGate, RoutingGate};
pub use options::{ApiOption, ApiOptions, OPTION_OFFLINE};
pub use views::{
    BlockApi, DagApi, DhtApi, FilesApi, KeyApi, NameApi, ObjectApi, PinApi, PubSubApi, SwarmApi,
};
