//! Pin set types
//!
//! Pins mark cids that must survive garbage collection. A direct pin covers
//! one node; a recursive pin covers the node and everything reachable from it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::content::Cid;

/// How much of the graph below a cid a pin protects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinKind {
    /// Only the pinned node itself
    Direct,
    /// The pinned node and its full reachable subgraph
    Recursive,
}

impl fmt::Display for PinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinKind::Direct => write!(f, "direct"),
            PinKind::Recursive => write!(f, "recursive"),
        }
    }
}

/// One entry in the pin set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinEntry {
    /// The pinned cid
    pub cid: Cid,
    /// Pin coverage
    pub kind: PinKind,
}

impl PinEntry {
    /// Create a pin entry
    pub fn new(cid: Cid, kind: PinKind) -> Self {
        Self { cid, kind }
    }
}
