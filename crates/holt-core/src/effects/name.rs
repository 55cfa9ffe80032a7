//! Naming system interfaces

use async_trait::async_trait;

use crate::errors::Result;
use crate::naming::{IpnsName, NameRecord};

/// The mutable naming layer over immutable content
#[async_trait]
pub trait NameSystem: Send + Sync {
    /// Store a record for a name
    ///
    /// Implementations must reject records with a sequence number lower than
    /// the one they already hold for the name.
    async fn publish(&self, name: &IpnsName, record: NameRecord) -> Result<()>;

    /// Resolve a name to its current record
    async fn resolve(&self, name: &IpnsName) -> Result<NameRecord>;
}

/// Validation applied to naming records before they are accepted
pub trait RecordValidator: Send + Sync {
    /// Check a record's signature and ownership for a name
    fn validate(&self, name: &IpnsName, record: &NameRecord) -> Result<()>;
}
