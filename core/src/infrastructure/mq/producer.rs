use std::time::Duration;

use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use tracing::{debug, error, info};

use crate::domain::common::MessagingConfig;
use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::event::ports::EventPublisher;

const PUBLISH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct KafkaEventPublisher {
    producer: FutureProducer,
}

impl KafkaEventPublisher {
    pub fn new(config: &MessagingConfig) -> Result<Self, anyhow::Error> {
        info!(brokers = %config.brokers, "connecting Kafka producer");

        let mut client_config = ClientConfig::new();
        client_config.set("bootstrap.servers", &config.brokers);
        if let Some(ref client_id) = config.client_id {
            client_config.set("client.id", client_id);
        }

        let producer: FutureProducer = client_config.create()?;

        Ok(Self { producer })
    }
}

impl EventPublisher for KafkaEventPublisher {
    async fn publish(&self, topic: &str, key: &str, payload: Vec<u8>) -> Result<(), CoreError> {
        let record = FutureRecord::to(topic).key(key).payload(&payload);

        self.producer
            .send(record, Timeout::After(PUBLISH_TIMEOUT))
            .await
            .map_err(|(e, _)| {
                error!(topic, "failed to publish event: {}", e);
                CoreError::Publish(e.to_string())
            })?;

        debug!(topic, key, "event published");

        Ok(())
    }
}
