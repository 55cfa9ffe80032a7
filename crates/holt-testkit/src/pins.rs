//! In-memory pin set

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use holt_core::{Cid, PinEntry, PinKind, Pinner, Result};

/// Pin set backed by a map
#[derive(Debug, Default)]
pub struct MemPinner {
    pins: RwLock<HashMap<Cid, PinKind>>,
}

impl MemPinner {
    /// Empty pin set
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Pinner for MemPinner {
    async fn pin(&self, cid: &Cid, kind: PinKind) -> Result<()> {
        self.pins.write().insert(*cid, kind);
        Ok(())
    }

    async fn unpin(&self, cid: &Cid) -> Result<bool> {
        Ok(self.pins.write().remove(cid).is_some())
    }

    async fn ls(&self) -> Result<Vec<PinEntry>> {
        Ok(self
            .pins
            .read()
            .iter()
            .map(|(cid, kind)| PinEntry::new(*cid, *kind))
            .collect())
    }

    async fn is_pinned(&self, cid: &Cid) -> Result<bool> {
        Ok(self.pins.read().contains_key(cid))
    }
}
