//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve listener config from the KV store (fatal on failure)
//! - Bind the listener and start serving (fatal on failure)
//! - Connect dependencies and register with discovery, concurrently
//! - Own the process-wide bootstrap state
//!
//! # Ordering Guarantees
//! - The listener is never told to accept before port and address resolve
//! - Registration is only attempted after the listener has bound (the
//!   registry needs a live health-check endpoint)
//! - The document-store connection is unordered relative to serving; it and
//!   the queue/registration branch must both resolve before `run` returns
//!
//! # Design Decisions
//! - Fail fast, no retries: every suspending step either succeeds or the
//!   state machine transitions to Failed and the error surfaces to `main`
//! - Registration is the single non-fatal step: the service can serve
//!   traffic without being discoverable

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::{ConfigResolver, Environment, KvStore, ServiceConfig};
use crate::discovery::{ConsulClient, ServiceRegistrar, ServiceRegistration, ServiceRegistry};
use crate::errors::BootstrapError;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::state::{BootstrapState, StageTracker};
use crate::queue::{KafkaProducer, QueueProducer};
use crate::store::{DocumentStore, MongoStore};

/// Handle returned once the service is fully operational.
#[derive(Debug)]
pub struct Ready {
    /// Address the listener actually bound to.
    pub local_addr: SocketAddr,
    /// Whether the discovery registry accepted the registration.
    pub registered: bool,
    /// The serve task; resolves when the server drains after shutdown.
    pub server: JoinHandle<std::io::Result<()>>,
}

/// Composes resolution, binding, dependency connection, and registration
/// into the startup sequence.
pub struct Bootstrap {
    config: ServiceConfig,
    environment: Environment,
    kv: Arc<dyn KvStore>,
    registry: Arc<dyn ServiceRegistry>,
    queue: Arc<dyn QueueProducer>,
    documents: Arc<dyn DocumentStore>,
    stages: StageTracker,
    shutdown: Shutdown,
}

impl Bootstrap {
    /// Wire a bootstrap from explicit collaborators.
    pub fn new(
        config: ServiceConfig,
        environment: Environment,
        kv: Arc<dyn KvStore>,
        registry: Arc<dyn ServiceRegistry>,
        queue: Arc<dyn QueueProducer>,
        documents: Arc<dyn DocumentStore>,
    ) -> Self {
        Self {
            config,
            environment,
            kv,
            registry,
            queue,
            documents,
            stages: StageTracker::new(),
            shutdown: Shutdown::new(),
        }
    }

    /// Production wiring: Consul for KV and registration, Kafka for the
    /// queue producer, MongoDB for the document store.
    pub fn from_config(config: ServiceConfig, environment: Environment) -> Self {
        let consul = Arc::new(ConsulClient::new(
            &config.consul.endpoint(environment).address,
        ));
        let queue = Arc::new(KafkaProducer::new(config.queue.clone()));
        let documents = Arc::new(MongoStore::new());
        Self::new(
            config,
            environment,
            consul.clone(),
            consul,
            queue,
            documents,
        )
    }

    /// Observe bootstrap state transitions.
    pub fn state(&self) -> watch::Receiver<BootstrapState> {
        self.stages.subscribe()
    }

    /// Shutdown handle for signal wiring and tests.
    pub fn shutdown_handle(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Run the startup sequence to completion.
    ///
    /// Fatal failures leave the state machine in `Failed` and surface the
    /// error to the caller; a registry rejection does not.
    pub async fn run(self) -> Result<Ready, BootstrapError> {
        match self.sequence().await {
            Ok(ready) => Ok(ready),
            Err(e) => {
                self.stages.fail(e.to_string());
                Err(e)
            }
        }
    }

    async fn sequence(&self) -> Result<Ready, BootstrapError> {
        let service = &self.config.service.name;
        let resolver = ConfigResolver::new(self.kv.as_ref(), service, self.environment);

        // 1. Resolve listener configuration.
        let port = resolver.resolve_port("port").await?;
        let address = resolver.resolve_string("address").await?;
        self.stages.advance(BootstrapState::Configured);

        // 2. Bind and start serving; /health answers from here on.
        let bound = HttpServer::new().bind(&address, port).await?;
        let local_addr = bound.local_addr();
        self.stages.advance(BootstrapState::Listening);
        let server = tokio::spawn(bound.serve(self.shutdown.subscribe()));

        info!(
            service = %service,
            environment = %self.environment,
            address = %local_addr,
            "listening, connecting dependencies"
        );

        // 3. Dependencies and registration, concurrently. The queue must be
        // up before this instance announces itself; the document store runs
        // its own resolve-then-connect branch.
        let registrar = ServiceRegistrar::new(self.registry.clone());
        let queue_then_register = async {
            self.queue.connect().await?;
            let registration = ServiceRegistration::new(
                service,
                port,
                &self.config.registration.check_interval,
            );
            Ok::<bool, BootstrapError>(registrar.register_instance(registration).await)
        };
        let document_store = async {
            let mongo_address = resolver.resolve_string("mongo.address").await?;
            self.documents.connect(&mongo_address).await
        };

        let (registered, ()) = tokio::try_join!(queue_then_register, document_store)?;

        // 4. Fully operational.
        self.stages.advance(BootstrapState::DependenciesConnected);
        if registered {
            self.stages.advance(BootstrapState::Registered);
        }

        info!(
            address = %local_addr,
            registered = registered,
            "bootstrap complete"
        );

        Ok(Ready {
            local_addr,
            registered,
            server,
        })
    }
}
