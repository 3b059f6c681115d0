//! Document-store subsystem.
//!
//! # Design Decisions
//! - The connection is a process-wide shared resource established once
//!   during bootstrap; teardown is out of scope
//! - The store address itself is dynamic configuration, resolved from the
//!   KV store right before connecting

pub mod documents;

use async_trait::async_trait;

use crate::errors::BootstrapError;

pub use documents::MongoStore;

/// The document-store connection seam.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Connect to the store at `address`; suspends until the connection is
    /// established or fails with a dependency error.
    async fn connect(&self, address: &str) -> Result<(), BootstrapError>;
}
