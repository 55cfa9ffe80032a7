//! Repo configuration interface

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;

/// The node's on-disk repository
#[async_trait]
pub trait Repo: Send + Sync {
    /// Read a configuration value
    async fn get_config(&self, key: &str) -> Result<Option<Value>>;

    /// Write a configuration value
    async fn set_config(&self, key: &str, value: Value) -> Result<()>;
}
