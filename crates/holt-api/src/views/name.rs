//! Naming capability
//!
//! Publish is doubly gated: the publish gate rejects it while a name mount
//! owns the record, and the routing gate rejects it offline unless the
//! caller opts into degraded behavior. Both are evaluated per call.

use holt_core::{
    Cid, HoltError, IpnsName, NameRecord, NameSystem, RecordValidator, Repo, Result,
};

use crate::api::NodeApi;

/// Repo key persisting the node's own publish counter
const SEQUENCE_KEY: &str = "name.self.sequence";

/// Publish and resolve mutable names
#[derive(Clone, Copy)]
pub struct NameApi<'a>(pub(crate) &'a NodeApi);

impl NameApi<'_> {
    /// Publish this node's name, pointing it at a cid
    ///
    /// Signs a fresh record with the node key and hands it to the naming
    /// system. The sequence counter is persisted in the repo so it keeps
    /// climbing across restarts even when no previous record resolves.
    pub async fn publish(&self, value: &Cid, allow_offline: bool) -> Result<NameRecord> {
        self.0.publish_gate.check()?;
        self.0.routing_gate.check(allow_offline).await?;

        let name = IpnsName::for_peer(self.0.identity);
        let sequence = match self.0.repo.get_config(SEQUENCE_KEY).await? {
            Some(previous) => previous
                .as_u64()
                .ok_or_else(|| {
                    HoltError::invalid_input(format!("repo key '{SEQUENCE_KEY}' is not a counter"))
                })?
                .saturating_add(1),
            None => 0,
        };

        let record = NameRecord::signed(&self.0.signing_key, *value, sequence);
        self.0.record_validator.validate(&name, &record)?;
        self.0.namesys.publish(&name, record.clone()).await?;
        self.0.repo.set_config(SEQUENCE_KEY, sequence.into()).await?;

        tracing::debug!(%name, sequence, value = %value, "published name record");
        Ok(record)
    }

    /// Resolve a name to the cid it currently points at
    pub async fn resolve(&self, name: &IpnsName, allow_offline: bool) -> Result<Cid> {
        self.0.routing_gate.check(allow_offline).await?;
        let record = self.0.namesys.resolve(name).await?;
        self.0.record_validator.validate(name, &record)?;
        Ok(record.value)
    }
}
