use chrono::NaiveDate;
use uuid::Uuid;

pub struct CreatePromotionInput {
    pub name: String,
    pub description: String,
    pub discount_percentage: f64,
    pub discount_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub restaurant_id: Uuid,
    pub country_code: String,
}

pub struct UpdatePromotionInput {
    pub promotion_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount_percentage: Option<f64>,
    pub discount_amount: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub restaurant_id: Option<Uuid>,
    pub country_code: Option<String>,
}
