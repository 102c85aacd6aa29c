//! Bundle IR — the aggregated generation unit plus configuration.

use serde::{Deserialize, Serialize};

use crate::service::Service;

/// Caller name used when configuration supplies none.
pub const DEFAULT_CALLER_NAME: &str = "Default";

/// Global configuration values, resolved once per generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerConfig {
    /// Caller name. Defaults to [`DEFAULT_CALLER_NAME`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Global base address. Absence is a soft warning, not a failure:
    /// generation still produces best-effort output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_address: Option<String>,
}

/// The fully aggregated, ready-to-emit collection of discovered services.
///
/// Created fresh on every generation pass and consumed immediately by the
/// emitter; nothing persists between passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerBundle {
    /// Caller name from configuration, or the default literal.
    pub name: String,

    /// Global base address from configuration, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_address: Option<String>,

    /// All surviving services, sorted lexicographically by name so output
    /// does not depend on declaration-enumeration order.
    pub services: Vec<Service>,
}

impl CallerBundle {
    /// Assemble the bundle from configuration and collected services.
    pub fn assemble(config: CallerConfig, mut services: Vec<Service>) -> Self {
        services.sort_by(|a, b| a.name.cmp(&b.name));
        CallerBundle {
            name: config.name.unwrap_or_else(|| DEFAULT_CALLER_NAME.to_string()),
            base_address: config.base_address,
            services,
        }
    }

    /// Find a service by name.
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }
}
