//! Instance registration with the non-fatal failure policy.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::discovery::registration::ServiceRegistration;
use crate::errors::BootstrapError;

/// Write access to the discovery registry.
#[async_trait]
pub trait ServiceRegistry: Send + Sync {
    /// Register the instance; the registry starts polling its health check.
    async fn register(&self, registration: &ServiceRegistration) -> Result<(), BootstrapError>;
}

/// Registers the running instance exactly once, after the listener binds.
///
/// A registry failure is reported but never propagated: the service can
/// still serve traffic without being discoverable.
pub struct ServiceRegistrar {
    registry: Arc<dyn ServiceRegistry>,
}

impl ServiceRegistrar {
    pub fn new(registry: Arc<dyn ServiceRegistry>) -> Self {
        Self { registry }
    }

    /// Attempt registration; returns whether the registry accepted it.
    pub async fn register_instance(&self, registration: ServiceRegistration) -> bool {
        match self.registry.register(&registration).await {
            Ok(()) => {
                info!(service = %registration, "service registered with discovery registry");
                true
            }
            Err(e) => {
                error!(service = %registration, error = %e, "failed to register with discovery registry");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct FailingRegistry {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ServiceRegistry for FailingRegistry {
        async fn register(&self, _: &ServiceRegistration) -> Result<(), BootstrapError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(BootstrapError::Registration {
                reason: "agent unreachable".into(),
            })
        }
    }

    #[tokio::test]
    async fn registry_failure_is_swallowed() {
        let registry = Arc::new(FailingRegistry {
            calls: AtomicUsize::new(0),
        });
        let registrar = ServiceRegistrar::new(registry.clone());

        let registered = registrar
            .register_instance(ServiceRegistration::new("flights", 8080, "10s"))
            .await;

        assert!(!registered);
        assert_eq!(registry.calls.load(Ordering::SeqCst), 1);
    }
}
