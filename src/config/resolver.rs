//! Dynamic configuration resolution from the KV store.
//!
//! # Responsibilities
//! - Namespace keys as `config/{service}/{environment}/{suffix}`
//! - Fetch raw scalar values through an injected [`KvStore`]
//! - Coerce values at the call site (port parsing)
//!
//! # Design Decisions
//! - No caching: every resolve is an independent round-trip, so values read
//!   at different points of the bootstrap can legitimately differ
//! - A present-but-unparseable value is a distinct error from a missing one

use async_trait::async_trait;

use crate::config::Environment;
use crate::errors::BootstrapError;

/// Read access to the distributed KV store.
///
/// Implementations map transport failures to
/// [`BootstrapError::ConfigUnavailable`]; an absent key is `Ok(None)`.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the raw scalar stored under `path`, if any.
    async fn get(&self, path: &str) -> Result<Option<String>, BootstrapError>;
}

/// Resolves environment-scoped configuration values.
pub struct ConfigResolver<'a> {
    kv: &'a dyn KvStore,
    service: &'a str,
    environment: Environment,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(kv: &'a dyn KvStore, service: &'a str, environment: Environment) -> Self {
        Self {
            kv,
            service,
            environment,
        }
    }

    /// Full KV path for a config suffix.
    pub fn key(&self, suffix: &str) -> String {
        format!("config/{}/{}/{}", self.service, self.environment, suffix)
    }

    /// Resolve a raw string value; absence is `ConfigUnavailable`.
    pub async fn resolve_string(&self, suffix: &str) -> Result<String, BootstrapError> {
        let key = self.key(suffix);
        let value = self.kv.get(&key).await?;
        value.ok_or_else(|| BootstrapError::ConfigUnavailable {
            key,
            reason: "key not present in KV store".to_string(),
        })
    }

    /// Resolve a value and coerce it to a TCP port number.
    pub async fn resolve_port(&self, suffix: &str) -> Result<u16, BootstrapError> {
        let key = self.key(suffix);
        let value = self.resolve_string(suffix).await?;
        value
            .trim()
            .parse::<u16>()
            .map_err(|_| BootstrapError::InvalidConfigValue {
                key,
                value,
                expected: "port number",
            })
    }
}
