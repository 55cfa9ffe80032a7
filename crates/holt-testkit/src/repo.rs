//! In-memory repo

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

use holt_core::{Repo, Result};

/// Repo configuration backed by a map
#[derive(Debug, Default)]
pub struct MemRepo {
    config: RwLock<HashMap<String, Value>>,
}

impl MemRepo {
    /// Empty repo
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repo for MemRepo {
    async fn get_config(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.config.read().get(key).cloned())
    }

    async fn set_config(&self, key: &str, value: Value) -> Result<()> {
        self.config.write().insert(key.to_string(), value);
        Ok(())
    }
}
