use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::event::{entities::CatalogEvent, ports::EventPublisher};

/// Serializes and publishes a catalog event.
///
/// The storage mutation that produced the event is already committed when
/// this runs; a failed publish is surfaced to the caller but the mutation is
/// never rolled back.
pub async fn emit<P: EventPublisher>(publisher: &P, event: CatalogEvent) -> Result<(), CoreError> {
    let payload = serde_json::to_vec(&event).map_err(|e| {
        error!("failed to encode catalog event: {}", e);
        CoreError::Publish(e.to_string())
    })?;

    publisher
        .publish(&event.topic(), &event.key(), payload)
        .await
}
