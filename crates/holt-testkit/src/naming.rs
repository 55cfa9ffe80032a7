//! In-memory naming system and record validation

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use holt_core::{HoltError, IpnsName, NameRecord, NameSystem, RecordValidator, Result};

/// Naming system backed by a map, enforcing sequence monotonicity
#[derive(Debug, Default)]
pub struct MemNameSystem {
    records: RwLock<HashMap<IpnsName, NameRecord>>,
}

impl MemNameSystem {
    /// Empty naming system
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NameSystem for MemNameSystem {
    async fn publish(&self, name: &IpnsName, record: NameRecord) -> Result<()> {
        let mut records = self.records.write();
        if let Some(existing) = records.get(name) {
            if record.sequence < existing.sequence {
                return Err(HoltError::invalid_input(format!(
                    "stale record for {name}: sequence {} behind {}",
                    record.sequence, existing.sequence
                )));
            }
        }
        records.insert(*name, record);
        Ok(())
    }

    async fn resolve(&self, name: &IpnsName) -> Result<NameRecord> {
        self.records
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| HoltError::not_found(format!("no record published for {name}")))
    }
}

/// Validator checking record signatures and name ownership
#[derive(Debug, Clone, Default)]
pub struct Ed25519RecordValidator;

impl RecordValidator for Ed25519RecordValidator {
    fn validate(&self, name: &IpnsName, record: &NameRecord) -> Result<()> {
        record.verify(name)
    }
}
