//! Unified error system for holt
//!
//! One error type covers the whole facade surface. Policy gates, capability
//! views, and collaborator implementations all report through [`HoltError`];
//! none of these failures are fatal, and the facade stays usable after any
//! of them.

use serde::{Deserialize, Serialize};

/// Unified error type for all holt operations
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum HoltError {
    /// A routing-dependent operation was attempted while the node is offline
    /// and the caller did not opt into degraded offline behavior
    #[error("node is offline and the operation requires routing")]
    Offline,

    /// The degraded local-only routing path could not be installed
    #[error("offline routing fallback failed: {message}")]
    OfflineFallback {
        /// Why the fallback install failed
        message: String,
    },

    /// A manual publish was attempted while the naming subsystem is
    /// mount-managed
    #[error("publish conflict: {message}")]
    PublishConflict {
        /// Description of the conflicting publisher
        message: String,
    },

    /// Construction received an option it does not recognize
    #[error("unsupported api option: {name}")]
    UnsupportedOption {
        /// Name of the rejected option
        name: String,
    },

    /// A write was attempted through a read-only handle
    #[error("read-only: {message}")]
    ReadOnly {
        /// Description of the rejected write
        message: String,
    },

    /// The operation's cancellation scope was cancelled
    #[error("cancelled: {message}")]
    Cancelled {
        /// What was cancelled
        message: String,
    },

    /// Resource not found
    #[error("not found: {message}")]
    NotFound {
        /// What was not found
        message: String,
    },

    /// Invalid input or configuration
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was invalid
        message: String,
    },

    /// Block or repo storage operation failed
    #[error("storage error: {message}")]
    Storage {
        /// Description of the storage failure
        message: String,
    },

    /// Peer routing or DHT operation failed
    #[error("routing error: {message}")]
    Routing {
        /// Description of the routing failure
        message: String,
    },

    /// Serialization or deserialization failed
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of the serialization failure
        message: String,
    },

    /// Internal system error
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl HoltError {
    /// Create an offline-fallback failure
    pub fn offline_fallback(message: impl Into<String>) -> Self {
        Self::OfflineFallback {
            message: message.into(),
        }
    }

    /// Create a publish-conflict error
    pub fn publish_conflict(message: impl Into<String>) -> Self {
        Self::PublishConflict {
            message: message.into(),
        }
    }

    /// Create an unsupported-option error
    pub fn unsupported_option(name: impl Into<String>) -> Self {
        Self::UnsupportedOption { name: name.into() }
    }

    /// Create a read-only error
    pub fn read_only(message: impl Into<String>) -> Self {
        Self::ReadOnly {
            message: message.into(),
        }
    }

    /// Create a cancelled error
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::Cancelled {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a routing error
    pub fn routing(message: impl Into<String>) -> Self {
        Self::Routing {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Standard Result type for holt operations
pub type Result<T> = std::result::Result<T, HoltError>;

impl From<std::io::Error> for HoltError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            _ => Self::storage(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for HoltError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
