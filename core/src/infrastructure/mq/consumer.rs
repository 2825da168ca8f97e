use rdkafka::Message;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use tracing::{error, info, warn};

use crate::domain::common::MessagingConfig;
use crate::domain::event::entities::CatalogEvent;

pub struct KafkaEventConsumer {
    consumer: StreamConsumer,
}

impl KafkaEventConsumer {
    pub fn new(config: &MessagingConfig, topics: &[&str]) -> Result<Self, anyhow::Error> {
        info!(brokers = %config.brokers, group_id = %config.group_id, "connecting Kafka consumer");

        let mut client_config = ClientConfig::new();
        client_config
            .set("bootstrap.servers", &config.brokers)
            .set("group.id", &config.group_id)
            .set("enable.auto.commit", "true")
            .set("auto.offset.reset", "earliest");
        if let Some(ref client_id) = config.client_id {
            client_config.set("client.id", client_id);
        }

        let consumer: StreamConsumer = client_config.create()?;
        consumer.subscribe(topics)?;

        Ok(Self { consumer })
    }

    /// Consumes until the owning task is dropped. Each decoded catalog event
    /// is logged; malformed payloads are skipped. Delivery is at-least-once,
    /// so duplicates are expected.
    pub async fn run(self) {
        loop {
            match self.consumer.recv().await {
                Err(e) => error!("kafka consume error: {}", e),
                Ok(message) => {
                    let Some(payload) = message.payload() else {
                        warn!("received message without payload");
                        continue;
                    };

                    match serde_json::from_slice::<CatalogEvent>(payload) {
                        Ok(event) => info!(
                            entity = event.entity.as_str(),
                            action = ?event.action,
                            entity_id = %event.entity_id,
                            "catalog event received"
                        ),
                        Err(e) => warn!("failed to decode catalog event: {}", e),
                    }
                }
            }
        }
    }
}
