//! Bootstrap error taxonomy.
//!
//! # Propagation Policy
//! - `ConfigUnavailable`, `InvalidConfigValue`, `Listen`, and
//!   `DependencyConnection` are fatal: they abort the startup sequence and
//!   surface from `Bootstrap::run` to the entry point.
//! - `Registration` is recovered locally by the registrar: logged, never
//!   propagated out of the registration path.

use thiserror::Error;

/// Errors that can occur while bringing the service up.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The KV store read failed or the key is absent.
    #[error("configuration unavailable for {key}: {reason}")]
    ConfigUnavailable { key: String, reason: String },

    /// The KV store returned a value that cannot be coerced to the
    /// expected type.
    #[error("invalid configuration value for {key}: {value:?} is not a valid {expected}")]
    InvalidConfigValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// The HTTP listener failed to bind.
    #[error("failed to bind listener on {addr}: {source}")]
    Listen {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// A dependent connection (queue producer, document store) could not be
    /// established.
    #[error("{dependency} connection failed: {reason}")]
    DependencyConnection {
        dependency: &'static str,
        reason: String,
    },

    /// The discovery registry rejected the registration call.
    #[error("service registration failed: {reason}")]
    Registration { reason: String },
}

impl BootstrapError {
    /// Shorthand for queue/document-store connect failures.
    pub fn dependency(dependency: &'static str, reason: impl Into<String>) -> Self {
        Self::DependencyConnection {
            dependency,
            reason: reason.into(),
        }
    }

    /// True for every category except the locally recovered registration one.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Registration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_is_the_only_non_fatal_category() {
        let fatal = [
            BootstrapError::ConfigUnavailable {
                key: "config/svc/prod/port".into(),
                reason: "connection refused".into(),
            },
            BootstrapError::InvalidConfigValue {
                key: "config/svc/prod/port".into(),
                value: "abc".into(),
                expected: "port number",
            },
            BootstrapError::Listen {
                addr: "127.0.0.1:80".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            },
            BootstrapError::dependency("kafka producer", "all brokers down"),
        ];
        for err in fatal {
            assert!(err.is_fatal(), "{err} should be fatal");
        }

        let recovered = BootstrapError::Registration {
            reason: "agent unreachable".into(),
        };
        assert!(!recovered.is_fatal());
    }
}
