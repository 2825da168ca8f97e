use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// Topics the catalog consumer subscribes to, one per entity kind.
pub const CATALOG_TOPICS: [&str; 6] = [
    "catalog.category",
    "catalog.menu_item",
    "catalog.modifier",
    "catalog.item_price",
    "catalog.item_availability",
    "catalog.promotion",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    Created,
    Updated,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Category,
    MenuItem,
    Modifier,
    ItemPrice,
    ItemAvailability,
    Promotion,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Category => "category",
            EntityKind::MenuItem => "menu_item",
            EntityKind::Modifier => "modifier",
            EntityKind::ItemPrice => "item_price",
            EntityKind::ItemAvailability => "item_availability",
            EntityKind::Promotion => "promotion",
        }
    }
}

/// Change notification published after a committed catalog mutation.
///
/// Delivery is at-least-once and not transactional with the catalog store:
/// consumers must tolerate duplicates and must not assume ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEvent {
    pub event_id: Uuid,
    pub entity: EntityKind,
    pub action: EventAction,
    pub entity_id: Uuid,
    pub restaurant_id: Uuid,
    pub country_code: String,
    pub occurred_at: DateTime<Utc>,
}

impl CatalogEvent {
    pub fn new(
        entity: EntityKind,
        action: EventAction,
        entity_id: Uuid,
        restaurant_id: Uuid,
        country_code: String,
    ) -> Self {
        Self {
            event_id: generate_uuid_v7(),
            entity,
            action,
            entity_id,
            restaurant_id,
            country_code,
            occurred_at: Utc::now(),
        }
    }

    pub fn topic(&self) -> String {
        format!("catalog.{}", self.entity.as_str())
    }

    /// Partitioning key: events for one entity land on one partition.
    pub fn key(&self) -> String {
        self.entity_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entity_kind_topic_is_subscribed() {
        let kinds = [
            EntityKind::Category,
            EntityKind::MenuItem,
            EntityKind::Modifier,
            EntityKind::ItemPrice,
            EntityKind::ItemAvailability,
            EntityKind::Promotion,
        ];

        for kind in kinds {
            let event = CatalogEvent::new(
                kind,
                EventAction::Created,
                Uuid::new_v4(),
                Uuid::new_v4(),
                "ID".to_string(),
            );
            assert!(CATALOG_TOPICS.contains(&event.topic().as_str()));
        }
    }

    #[test]
    fn event_payload_uses_snake_case_actions() {
        let event = CatalogEvent::new(
            EntityKind::MenuItem,
            EventAction::Updated,
            Uuid::new_v4(),
            Uuid::new_v4(),
            "SG".to_string(),
        );

        let payload = serde_json::to_value(&event).unwrap();
        assert_eq!(payload["entity"], "menu_item");
        assert_eq!(payload["action"], "updated");
    }
}
