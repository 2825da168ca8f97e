use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItemPriceValidator {
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "cost_price must not be negative"))]
    pub cost_price: f64,

    /// Defaults to USD when omitted
    #[serde(default)]
    pub currency: String,

    pub start_date: NaiveDate,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    pub restaurant_id: Uuid,

    #[validate(length(equal = 2, message = "country_code must be 2 characters"))]
    pub country_code: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItemPriceValidator {
    #[serde(default)]
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "cost_price must not be negative"))]
    pub cost_price: Option<f64>,

    #[serde(default)]
    #[validate(length(equal = 3, message = "currency must be 3 characters"))]
    pub currency: Option<String>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}
