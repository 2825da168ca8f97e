use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePromotionValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "discount_percentage must be 0-100"))]
    pub discount_percentage: f64,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "discount_amount must not be negative"))]
    pub discount_amount: f64,

    pub start_date: NaiveDate,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    pub restaurant_id: Uuid,

    #[validate(length(equal = 2, message = "country_code must be 2 characters"))]
    pub country_code: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePromotionValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "discount_percentage must be 0-100"))]
    pub discount_percentage: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0.0, message = "discount_amount must not be negative"))]
    pub discount_amount: Option<f64>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub restaurant_id: Option<Uuid>,

    #[serde(default)]
    #[validate(length(equal = 2, message = "country_code must be 2 characters"))]
    pub country_code: Option<String>,
}
