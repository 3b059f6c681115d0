//! Static configuration schema.
//!
//! This covers only what must be known before the KV store can be reached:
//! service identity, the Consul endpoint for each environment, the Kafka
//! broker list, and observability settings. Listener port/address and the
//! document-store address are dynamic and resolved at bootstrap.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::config::Environment;

/// Root static configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service identity (name used for KV namespacing and registration).
    pub service: ServiceIdentity,

    /// Consul endpoints, one per environment.
    pub consul: ConsulConfig,

    /// Kafka producer settings.
    pub queue: QueueConfig,

    /// Discovery registration settings.
    pub registration: RegistrationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Identity of this service instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceIdentity {
    /// Service name; also the address other services reach us under.
    pub name: String,
}

impl Default for ServiceIdentity {
    fn default() -> Self {
        Self {
            name: "flight-status-service".to_string(),
        }
    }
}

/// Consul endpoints keyed by environment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsulConfig {
    pub dev: ConsulEndpoint,
    pub prod: ConsulEndpoint,
}

impl ConsulConfig {
    /// Endpoint for the selected environment.
    pub fn endpoint(&self, environment: Environment) -> &ConsulEndpoint {
        match environment {
            Environment::Dev => &self.dev,
            Environment::Prod => &self.prod,
        }
    }
}

impl Default for ConsulConfig {
    fn default() -> Self {
        Self {
            dev: ConsulEndpoint {
                address: "http://127.0.0.1:8500".to_string(),
            },
            prod: ConsulEndpoint {
                address: "http://consul:8500".to_string(),
            },
        }
    }
}

/// A single Consul agent endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsulEndpoint {
    /// Base URL of the agent HTTP API (e.g., "http://127.0.0.1:8500").
    pub address: String,
}

/// Kafka producer configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Comma-separated broker list.
    pub brokers: String,

    /// Optional client identifier reported to the brokers.
    pub client_id: Option<String>,

    /// Timeout for the connect probe and for sends, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            brokers: "127.0.0.1:9092".to_string(),
            client_id: None,
            request_timeout_secs: 10,
        }
    }
}

/// Discovery registration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Health-check poll interval, in Consul duration syntax (e.g., "10s").
    pub check_interval: String,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            check_interval: "10s".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
