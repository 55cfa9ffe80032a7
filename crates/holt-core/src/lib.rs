//! Holt Core - Types and Collaborator Interfaces
//!
//! This crate provides the foundational types of the holt node facade and the
//! pure trait interfaces for every subsystem the facade composes. It contains
//! no subsystem implementations: block storage, DAG traversal, naming,
//! pinning, routing, and pub/sub are specified here only at their interface
//! boundary and provided by the node embedding the facade (or by
//! `holt-testkit` fakes in tests).
//!
//! # Contents
//!
//! - Content addressing: [`Cid`], [`Block`], [`DagNode`], [`DagLink`]
//! - Identity: [`PeerId`] derived from an Ed25519 verifying key
//! - Naming: [`IpnsName`], [`NameRecord`] signed publish records
//! - Pinning: [`PinKind`], [`PinEntry`]
//! - Cancellation: [`CancelScope`] hierarchical scopes
//! - Errors: the unified [`HoltError`] and [`Result`] alias
//! - Collaborator interfaces under [`effects`], including the [`Node`]
//!   aggregate every facade is constructed from

#![forbid(unsafe_code)]

/// Unified error handling
pub mod errors;

/// Node and peer identifier types
pub mod identifiers;

/// Content addressing: cids and raw blocks
pub mod content;

/// Merkle-DAG node and link types
pub mod dag;

/// Naming records and name identifiers
pub mod naming;

/// Pin set types
pub mod pin;

/// Hierarchical cancellation scopes
pub mod scope;

/// Pure collaborator interfaces (no implementations)
pub mod effects;

// === Public API Re-exports ===

pub use content::{Block, BlockStat, Cid};
pub use dag::{DagLink, DagNode, ObjectStat};
pub use errors::{HoltError, Result};
pub use identifiers::{PeerId, SubscriptionId};
pub use naming::{IpnsName, KeyInfo, NameRecord};
pub use pin::{PinEntry, PinKind};
pub use scope::CancelScope;

pub use effects::{
    BlockService, BlockStore, DagRead, DagService, Exchange, GcBlockStore, NameSystem, Node,
    PeerHost, Peerstore, Pinner, PubSub, PubSubMessage, RecordValidator, Repo, Routing,
    Subscription,
};

// Re-export the signature types the naming and key surfaces are built on.
pub use ed25519_dalek::{Signature, SigningKey, VerifyingKey};
