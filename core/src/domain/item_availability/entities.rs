use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;
use crate::domain::item_availability::value_objects::CreateItemAvailabilityInput;

/// An availability window for a menu item. Open-ended when the dates are
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemAvailability {
    pub id: Uuid,
    pub item_id: Uuid,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_available: bool,
    pub restaurant_id: Uuid,
    pub country_code: String,
    pub created_at: DateTime<Utc>,
}

impl ItemAvailability {
    pub fn new(input: CreateItemAvailabilityInput) -> Self {
        Self {
            id: generate_uuid_v7(),
            item_id: input.item_id,
            start_date: input.start_date,
            end_date: input.end_date,
            is_available: input.is_available,
            restaurant_id: input.restaurant_id,
            country_code: input.country_code,
            created_at: Utc::now(),
        }
    }

    pub fn update(
        &mut self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        is_available: Option<bool>,
    ) {
        if let Some(start_date) = start_date {
            self.start_date = Some(start_date);
        }
        if let Some(end_date) = end_date {
            self.end_date = Some(end_date);
        }
        if let Some(is_available) = is_available {
            self.is_available = is_available;
        }
    }
}
