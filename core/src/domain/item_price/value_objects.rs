use chrono::NaiveDate;
use uuid::Uuid;

pub struct CreateItemPriceInput {
    pub item_id: Uuid,
    pub price: f64,
    pub cost_price: f64,
    pub currency: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub restaurant_id: Uuid,
    pub country_code: String,
}

pub struct UpdateItemPriceInput {
    pub price_id: Uuid,
    pub price: Option<f64>,
    pub cost_price: Option<f64>,
    pub currency: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
