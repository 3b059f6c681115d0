//! Service registration record.

use std::fmt;

/// Everything the discovery registry needs to know about this instance.
///
/// Constructed once after the listener has bound, sent to the registry, and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRegistration {
    /// Service name, also used as the registry-visible address: other
    /// services reach an instance through discovery DNS, not a raw IP.
    pub name: String,
    /// Address other instances connect to.
    pub address: String,
    /// Listener port.
    pub port: u16,
    /// URL the registry polls; must be served by this process.
    pub health_check_url: String,
    /// Poll interval in registry duration syntax (e.g., "10s").
    pub check_interval: String,
}

impl ServiceRegistration {
    /// Build a registration for this instance.
    ///
    /// The health check points back at our own `/health` endpoint through
    /// the service name, matching how the registry will later address us.
    pub fn new(name: &str, port: u16, check_interval: &str) -> Self {
        Self {
            name: name.to_string(),
            address: name.to_string(),
            port,
            health_check_url: format!("http://{}:{}/health", name, port),
            check_interval: check_interval.to_string(),
        }
    }
}

impl fmt::Display for ServiceRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.name, self.address, self.port)
    }
}
