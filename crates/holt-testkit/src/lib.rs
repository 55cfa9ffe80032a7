//! Holt Testing Infrastructure
//!
//! In-memory implementations of every collaborator interface in
//! `holt-core::effects`, plus a configurable [`TestNode`] that wires them
//! together. Production crates never ship fakes; they live here and are
//! pulled in as dev-dependencies.
//!
//! # Usage
//!
//! Add this to your crate's `Cargo.toml` dev-dependencies:
//! ```toml
//! [dev-dependencies]
//! holt-testkit = { path = "../holt-testkit" }
//! ```
//!
//! Then in your tests:
//! ```rust,no_run
//! use holt_testkit::TestNode;
//!
//! # async fn example() {
//! let node = TestNode::builder().online(false).build();
//! // ... construct the facade over `node` and exercise it
//! # }
//! ```

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod dag;
pub mod exchange;
pub mod fixtures;
pub mod naming;
pub mod net;
pub mod node;
pub mod pins;
pub mod pubsub;
pub mod repo;
pub mod stores;

// Re-export commonly used items
pub use dag::MemDagService;
pub use exchange::MemExchange;
pub use fixtures::*;
pub use naming::{Ed25519RecordValidator, MemNameSystem};
pub use net::{MemPeerHost, MemPeerstore, MemRouting};
pub use node::{TestNode, TestNodeBuilder};
pub use pins::MemPinner;
pub use pubsub::MemPubSub;
pub use repo::MemRepo;
pub use stores::{MemBlockService, MemBlockStore};

// Re-export commonly used external types for convenience
pub use ed25519_dalek::{SigningKey, VerifyingKey};
pub use uuid::Uuid;
