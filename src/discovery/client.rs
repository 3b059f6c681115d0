//! Consul agent HTTP client.
//!
//! # Responsibilities
//! - KV reads (`GET /v1/kv/{path}`), decoding the base64 `Value`
//! - Service registration (`PUT /v1/agent/service/register`)
//!
//! # Design Decisions
//! - Absent KV keys (404) are `Ok(None)`, not errors: whether absence is
//!   fatal is the resolver's call
//! - Transport failures map straight into the bootstrap error taxonomy so
//!   callers never see reqwest types

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::KvStore;
use crate::discovery::registrar::ServiceRegistry;
use crate::discovery::registration::ServiceRegistration;
use crate::errors::BootstrapError;

/// One entry of a Consul KV read response.
#[derive(Debug, Deserialize)]
struct KvEntry {
    #[serde(rename = "Value")]
    value: Option<String>,
}

/// Body of an agent service registration call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RegisterBody<'a> {
    name: &'a str,
    address: &'a str,
    port: u16,
    check: RegisterCheck<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct RegisterCheck<'a> {
    #[serde(rename = "HTTP")]
    http: &'a str,
    interval: &'a str,
}

/// Client for the Consul agent HTTP API.
pub struct ConsulClient {
    http: reqwest::Client,
    base_url: String,
}

impl ConsulClient {
    /// Create a client for the agent at `endpoint`
    /// (e.g., "http://127.0.0.1:8500").
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl KvStore for ConsulClient {
    async fn get(&self, path: &str) -> Result<Option<String>, BootstrapError> {
        let url = format!("{}/v1/kv/{}", self.base_url, path);
        let unavailable = |reason: String| BootstrapError::ConfigUnavailable {
            key: path.to_string(),
            reason,
        };

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(unavailable(format!(
                "KV store answered {}",
                response.status()
            )));
        }

        let entries: Vec<KvEntry> = response
            .json()
            .await
            .map_err(|e| unavailable(format!("malformed KV response: {}", e)))?;

        let encoded = match entries.into_iter().next().and_then(|e| e.value) {
            Some(encoded) => encoded,
            None => return Ok(None),
        };

        let raw = BASE64
            .decode(&encoded)
            .map_err(|e| unavailable(format!("value is not valid base64: {}", e)))?;
        let value = String::from_utf8(raw)
            .map_err(|e| unavailable(format!("value is not valid UTF-8: {}", e)))?;

        debug!(key = path, "KV value resolved");
        Ok(Some(value))
    }
}

#[async_trait]
impl ServiceRegistry for ConsulClient {
    async fn register(&self, registration: &ServiceRegistration) -> Result<(), BootstrapError> {
        let url = format!("{}/v1/agent/service/register", self.base_url);
        let body = RegisterBody {
            name: &registration.name,
            address: &registration.address,
            port: registration.port,
            check: RegisterCheck {
                http: &registration.health_check_url,
                interval: &registration.check_interval,
            },
        };

        let response = self
            .http
            .put(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BootstrapError::Registration {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(BootstrapError::Registration {
                reason: format!("agent answered {}", response.status()),
            });
        }

        debug!(service = %registration, "registration accepted by agent");
        Ok(())
    }
}
