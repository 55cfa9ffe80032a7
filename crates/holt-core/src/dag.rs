//! Merkle-DAG node and link types
//!
//! A [`DagNode`] carries opaque data plus named links to other nodes. Nodes
//! are addressed by the digest of their canonical encoding, so a cid commits
//! to the node's data and to every link it holds (and, transitively, to the
//! whole subgraph below it).

use serde::{Deserialize, Serialize};

use crate::content::Cid;
use crate::errors::Result;

/// A named link from one DAG node to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DagLink {
    /// Link name, unique within the parent node
    pub name: String,
    /// Address of the linked node
    pub cid: Cid,
}

impl DagLink {
    /// Create a link
    pub fn new(name: impl Into<String>, cid: Cid) -> Self {
        Self {
            name: name.into(),
            cid,
        }
    }
}

/// A merkle-DAG node: opaque data plus named links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DagNode {
    /// Opaque payload bytes
    pub data: Vec<u8>,
    /// Named links to child nodes
    pub links: Vec<DagLink>,
}

impl DagNode {
    /// Create a leaf node holding only data
    pub fn leaf(data: Vec<u8>) -> Self {
        Self {
            data,
            links: Vec::new(),
        }
    }

    /// Create a node with data and links
    pub fn new(data: Vec<u8>, links: Vec<DagLink>) -> Self {
        Self { data, links }
    }

    /// Canonical encoding used for addressing
    ///
    /// Field order is fixed by the struct declaration, so equal nodes always
    /// encode to equal bytes.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a node from its canonical encoding
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The node's content address
    pub fn cid(&self) -> Result<Cid> {
        Ok(Cid::for_data(&self.encode()?))
    }

    /// Look up a link by name
    pub fn link(&self, name: &str) -> Option<&DagLink> {
        self.links.iter().find(|l| l.name == name)
    }
}

/// Shape information about a DAG node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectStat {
    /// The node's address
    pub cid: Cid,
    /// Number of outgoing links
    pub num_links: usize,
    /// Size of the node's payload in bytes
    pub data_size: usize,
    /// Size of the canonical encoding in bytes
    pub encoded_size: usize,
}
