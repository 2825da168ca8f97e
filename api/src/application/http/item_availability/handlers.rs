pub mod create_item_availability;
pub mod delete_item_availability;
pub mod get_item_availability;
pub mod update_item_availability;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use sajian_core::domain::item_availability::entities::ItemAvailability;

/// Wire shape shared by the item availability handlers.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ItemAvailabilityData {
    pub availability_id: Uuid,
    pub item_id: Uuid,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_available: bool,
    pub restaurant_id: Uuid,
    pub country_code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ItemAvailability> for ItemAvailabilityData {
    fn from(availability: ItemAvailability) -> Self {
        Self {
            availability_id: availability.id,
            item_id: availability.item_id,
            start_date: availability.start_date,
            end_date: availability.end_date,
            is_available: availability.is_available,
            restaurant_id: availability.restaurant_id,
            country_code: availability.country_code,
            created_at: availability.created_at,
        }
    }
}
