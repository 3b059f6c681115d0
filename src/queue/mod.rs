//! Message-queue subsystem.
//!
//! # Design Decisions
//! - The producer is a process-wide shared resource: connected once during
//!   bootstrap, reused for the process lifetime, no teardown management
//! - No retry on connect: a failure propagates to the orchestrator, which
//!   treats it as fatal to startup

pub mod producer;

use async_trait::async_trait;

use crate::errors::BootstrapError;

pub use producer::KafkaProducer;

/// The message-queue producer connection seam.
#[async_trait]
pub trait QueueProducer: Send + Sync {
    /// Establish the producer connection; suspends until the cluster is
    /// reachable or fails with a dependency error.
    async fn connect(&self) -> Result<(), BootstrapError>;
}
