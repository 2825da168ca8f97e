use chrono::{TimeZone, Utc};

use crate::domain::item_availability::entities::ItemAvailability;
use crate::entity::item_availability::Model as ItemAvailabilityModel;

impl From<ItemAvailabilityModel> for ItemAvailability {
    fn from(model: ItemAvailabilityModel) -> Self {
        let created_at = Utc.from_utc_datetime(&model.created_at);
        ItemAvailability {
            id: model.id,
            item_id: model.item_id,
            start_date: model.start_date,
            end_date: model.end_date,
            is_available: model.is_available,
            restaurant_id: model.restaurant_id,
            country_code: model.country_code,
            created_at,
        }
    }
}

impl From<&ItemAvailabilityModel> for ItemAvailability {
    fn from(model: &ItemAvailabilityModel) -> Self {
        ItemAvailability::from(model.clone())
    }
}
