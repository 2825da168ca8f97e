use chrono::NaiveDate;
use uuid::Uuid;

pub struct CreateItemAvailabilityInput {
    pub item_id: Uuid,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_available: bool,
    pub restaurant_id: Uuid,
    pub country_code: String,
}

pub struct UpdateItemAvailabilityInput {
    pub availability_id: Uuid,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_available: Option<bool>,
}
