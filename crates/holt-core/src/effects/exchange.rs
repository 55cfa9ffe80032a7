//! Block exchange interface

use async_trait::async_trait;

use crate::content::{Block, Cid};
use crate::errors::Result;

/// The peer block exchange
#[async_trait]
pub trait Exchange: Send + Sync {
    /// Fetch a block from connected peers
    async fn fetch(&self, cid: &Cid) -> Result<Block>;

    /// Announce a newly stored block to interested peers
    async fn announce(&self, block: &Block) -> Result<()>;
}
