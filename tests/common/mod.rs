//! Shared stubs for bootstrap integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use flight_status_service::config::KvStore;
use flight_status_service::discovery::{ServiceRegistration, ServiceRegistry};
use flight_status_service::errors::BootstrapError;
use flight_status_service::queue::QueueProducer;
use flight_status_service::store::DocumentStore;

/// In-memory KV store.
pub struct StaticKv {
    entries: HashMap<String, String>,
}

impl StaticKv {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Entries for the default service name in prod.
    pub fn for_prod(port: &str, address: &str, mongo: &str) -> Self {
        Self::new(&[
            ("config/flight-status-service/prod/port", port),
            ("config/flight-status-service/prod/address", address),
            ("config/flight-status-service/prod/mongo.address", mongo),
        ])
    }
}

#[async_trait]
impl KvStore for StaticKv {
    async fn get(&self, path: &str) -> Result<Option<String>, BootstrapError> {
        Ok(self.entries.get(path).cloned())
    }
}

/// Registry stub recording every registration it is offered.
pub struct RecordingRegistry {
    pub fail: bool,
    pub registrations: Mutex<Vec<ServiceRegistration>>,
}

impl RecordingRegistry {
    pub fn accepting() -> Self {
        Self {
            fail: false,
            registrations: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            registrations: Mutex::new(Vec::new()),
        }
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.lock().unwrap().len()
    }
}

#[async_trait]
impl ServiceRegistry for RecordingRegistry {
    async fn register(&self, registration: &ServiceRegistration) -> Result<(), BootstrapError> {
        self.registrations
            .lock()
            .unwrap()
            .push(registration.clone());
        if self.fail {
            Err(BootstrapError::Registration {
                reason: "stub registry rejects everything".into(),
            })
        } else {
            Ok(())
        }
    }
}

/// Queue producer stub.
pub struct StubQueue {
    pub fail: bool,
    pub connects: AtomicUsize,
}

impl StubQueue {
    pub fn connecting() -> Self {
        Self {
            fail: false,
            connects: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            connects: AtomicUsize::new(0),
        }
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueueProducer for StubQueue {
    async fn connect(&self) -> Result<(), BootstrapError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(BootstrapError::dependency(
                "kafka producer",
                "stub brokers unreachable",
            ))
        } else {
            Ok(())
        }
    }
}

/// Document-store stub.
///
/// With `health_probe_port` set, the stub hits the service's own health
/// endpoint during connect, recording the status it saw. That lets tests
/// prove the listener was already up when the connect failed.
pub struct StubDocumentStore {
    pub fail: bool,
    pub health_probe_port: Option<u16>,
    pub addresses: Mutex<Vec<String>>,
    pub probed_status: Mutex<Option<u16>>,
}

impl StubDocumentStore {
    pub fn connecting() -> Self {
        Self {
            fail: false,
            health_probe_port: None,
            addresses: Mutex::new(Vec::new()),
            probed_status: Mutex::new(None),
        }
    }

    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            fail: true,
            health_probe_port: None,
            addresses: Mutex::new(Vec::new()),
            probed_status: Mutex::new(None),
        }
    }

    pub fn failing_after_health_probe(port: u16) -> Self {
        Self {
            fail: true,
            health_probe_port: Some(port),
            addresses: Mutex::new(Vec::new()),
            probed_status: Mutex::new(None),
        }
    }

    pub fn connected_addresses(&self) -> Vec<String> {
        self.addresses.lock().unwrap().clone()
    }

    pub fn probed_status(&self) -> Option<u16> {
        *self.probed_status.lock().unwrap()
    }
}

#[async_trait]
impl DocumentStore for StubDocumentStore {
    async fn connect(&self, address: &str) -> Result<(), BootstrapError> {
        self.addresses.lock().unwrap().push(address.to_string());

        if let Some(port) = self.health_probe_port {
            let url = format!("http://127.0.0.1:{}/health", port);
            if let Ok(response) = reqwest::get(&url).await {
                *self.probed_status.lock().unwrap() = Some(response.status().as_u16());
            }
        }

        if self.fail {
            Err(BootstrapError::dependency(
                "document store",
                "stub store unreachable",
            ))
        } else {
            Ok(())
        }
    }
}
