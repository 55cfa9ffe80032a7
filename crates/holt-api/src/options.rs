//! Construction-time configuration options
//!
//! Options are an open set of named values so callers can be forward-written
//! against newer facades, but unrecognized names are rejected at construction
//! rather than silently ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use holt_core::{HoltError, Result};

/// Option forcing the routing gate to treat the node as offline
pub const OPTION_OFFLINE: &str = "offline";

/// One named construction option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiOption {
    /// Option name
    pub name: String,
    /// Option payload
    pub value: Value,
}

/// The options applied when constructing a [`crate::NodeApi`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiOptions {
    options: Vec<ApiOption>,
}

impl ApiOptions {
    /// No options; gates get their default behavior
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named option
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.push(ApiOption {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append the offline option
    pub fn offline(self, offline: bool) -> Self {
        self.with(OPTION_OFFLINE, offline)
    }

    /// Whether any options were supplied
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Validate the option list and fold it into gate configuration
    ///
    /// Later options override earlier ones with the same name. Unrecognized
    /// names fail here, before any facade state is built.
    pub(crate) fn resolve(&self) -> Result<ResolvedOptions> {
        let mut resolved = ResolvedOptions::default();
        for option in &self.options {
            match option.name.as_str() {
                OPTION_OFFLINE => {
                    resolved.force_offline = option.value.as_bool().ok_or_else(|| {
                        HoltError::invalid_input(format!(
                            "option '{OPTION_OFFLINE}' expects a boolean"
                        ))
                    })?;
                }
                other => return Err(HoltError::unsupported_option(other)),
            }
        }
        Ok(resolved)
    }
}

/// Gate configuration distilled from the option list
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ResolvedOptions {
    pub force_offline: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_options_resolve_to_defaults() {
        let resolved = ApiOptions::new().resolve().expect("resolve");
        assert!(!resolved.force_offline);
    }

    #[test]
    fn offline_option_is_recognized() {
        let resolved = ApiOptions::new().offline(true).resolve().expect("resolve");
        assert!(resolved.force_offline);
    }

    #[test]
    fn later_option_overrides_earlier() {
        let resolved = ApiOptions::new()
            .offline(true)
            .offline(false)
            .resolve()
            .expect("resolve");
        assert!(!resolved.force_offline);
    }

    #[test]
    fn unknown_option_is_rejected_by_name() {
        let err = ApiOptions::new()
            .with("fetch-blocks", true)
            .resolve()
            .expect_err("unknown option must fail");
        assert!(matches!(
            err,
            HoltError::UnsupportedOption { name } if name == "fetch-blocks"
        ));
    }

    #[test]
    fn mistyped_option_value_is_rejected() {
        let err = ApiOptions::new()
            .with(OPTION_OFFLINE, "yes")
            .resolve()
            .expect_err("non-boolean offline must fail");
        assert!(matches!(err, HoltError::InvalidInput { .. }));
    }
}
