//! Pin set interface

use async_trait::async_trait;

use crate::content::Cid;
use crate::errors::Result;
use crate::pin::{PinEntry, PinKind};

/// The node's pin set
#[async_trait]
pub trait Pinner: Send + Sync {
    /// Pin a cid; re-pinning with a different kind upgrades the entry
    async fn pin(&self, cid: &Cid, kind: PinKind) -> Result<()>;

    /// Remove a pin, returning whether it was present
    async fn unpin(&self, cid: &Cid) -> Result<bool>;

    /// List all pin entries
    async fn ls(&self) -> Result<Vec<PinEntry>>;

    /// Whether a cid is pinned (directly or recursively)
    async fn is_pinned(&self, cid: &Cid) -> Result<bool>;
}
