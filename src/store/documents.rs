//! MongoDB connector.
//!
//! # Responsibilities
//! - Parse the resolved connection string
//! - Apply the fixed 30 s connection idle timeout
//! - Suspend until the server answers a ping, so "connected" means reachable

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use tokio::sync::OnceCell;
use tracing::info;

use crate::errors::BootstrapError;
use crate::store::DocumentStore;

const DEPENDENCY: &str = "document store";

/// Idle timeout applied to established connections, not to the attempt.
const IDLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Process-wide MongoDB client, connected once during bootstrap.
#[derive(Default)]
pub struct MongoStore {
    client: OnceCell<Client>,
}

impl MongoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to a database on the connected client.
    ///
    /// Only valid after [`connect`](DocumentStore::connect) has succeeded.
    pub fn database(&self, name: &str) -> Result<mongodb::Database, BootstrapError> {
        self.client
            .get()
            .map(|client| client.database(name))
            .ok_or_else(|| {
                BootstrapError::dependency(DEPENDENCY, "database accessed before connect")
            })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn connect(&self, address: &str) -> Result<(), BootstrapError> {
        let mut options = ClientOptions::parse(address)
            .await
            .map_err(|e| BootstrapError::dependency(DEPENDENCY, e.to_string()))?;
        options.max_idle_time = Some(IDLE_TIMEOUT);

        let client = Client::with_options(options)
            .map_err(|e| BootstrapError::dependency(DEPENDENCY, e.to_string()))?;

        // The driver connects lazily; ping so this call only resolves once
        // the server is actually reachable.
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| BootstrapError::dependency(DEPENDENCY, e.to_string()))?;

        info!("document store connected");

        let _ = self.client.set(client);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_address_is_a_dependency_error() {
        let store = MongoStore::new();
        let err = store.connect("not-a-connection-string").await.unwrap_err();
        assert!(matches!(
            err,
            BootstrapError::DependencyConnection { dependency, .. }
                if dependency == "document store"
        ));
    }

    #[tokio::test]
    async fn database_before_connect_is_refused() {
        let store = MongoStore::new();
        assert!(store.database("flights").is_err());
    }
}
