//! Kafka producer connector.
//!
//! # Responsibilities
//! - Build the producer from static queue config
//! - Confirm broker reachability on connect (metadata fetch)
//! - Expose publishing for the rest of the service

use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::schema::QueueConfig;
use crate::errors::BootstrapError;
use crate::queue::QueueProducer;

const DEPENDENCY: &str = "kafka producer";

/// Process-wide Kafka producer, connected once during bootstrap.
pub struct KafkaProducer {
    config: QueueConfig,
    timeout: Duration,
    inner: OnceCell<FutureProducer>,
}

impl KafkaProducer {
    pub fn new(config: QueueConfig) -> Self {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        Self {
            config,
            timeout,
            inner: OnceCell::new(),
        }
    }

    fn build_producer(&self) -> Result<FutureProducer, BootstrapError> {
        let mut client_config = ClientConfig::new();
        client_config.set("bootstrap.servers", &self.config.brokers);
        if let Some(client_id) = &self.config.client_id {
            client_config.set("client.id", client_id);
        }

        client_config
            .create()
            .map_err(|e| BootstrapError::dependency(DEPENDENCY, e.to_string()))
    }

    /// Publish a JSON-serialized event with a partitioning key.
    ///
    /// Only valid after [`connect`](QueueProducer::connect) has succeeded.
    pub async fn publish<E: Serialize + Send + Sync>(
        &self,
        topic: &str,
        key: &str,
        event: &E,
    ) -> Result<(i32, i64), BootstrapError> {
        let producer = self.inner.get().ok_or_else(|| {
            BootstrapError::dependency(DEPENDENCY, "publish called before connect")
        })?;

        let payload = serde_json::to_string(event)
            .map_err(|e| BootstrapError::dependency(DEPENDENCY, e.to_string()))?;
        let record = FutureRecord::to(topic).payload(&payload).key(key);

        let (partition, offset) = producer
            .send(record, Timeout::After(self.timeout))
            .await
            .map_err(|(e, _)| BootstrapError::dependency(DEPENDENCY, e.to_string()))?;

        debug!(
            topic = topic,
            key = key,
            partition = partition,
            offset = offset,
            "event published"
        );

        Ok((partition, offset))
    }
}

#[async_trait]
impl QueueProducer for KafkaProducer {
    async fn connect(&self) -> Result<(), BootstrapError> {
        let producer = self.build_producer()?;

        // Creating the producer does not touch the network; a metadata
        // fetch is what proves the cluster is actually reachable.
        let probe = producer.clone();
        let timeout = self.timeout;
        let broker_count = tokio::task::spawn_blocking(move || {
            probe
                .client()
                .fetch_metadata(None, timeout)
                .map(|metadata| metadata.brokers().len())
        })
        .await
        .map_err(|e| BootstrapError::dependency(DEPENDENCY, e.to_string()))?
        .map_err(|e| BootstrapError::dependency(DEPENDENCY, e.to_string()))?;

        if broker_count == 0 {
            return Err(BootstrapError::dependency(
                DEPENDENCY,
                "cluster metadata lists no brokers",
            ));
        }

        info!(
            brokers = %self.config.brokers,
            broker_count = broker_count,
            "kafka producer connected"
        );

        // First connect wins; bootstrap only calls this once.
        let _ = self.inner.set(producer);
        Ok(())
    }
}
