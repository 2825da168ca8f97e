pub mod create_promotion;
pub mod delete_promotion;
pub mod get_promotion;
pub mod get_promotions;
pub mod update_promotion;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use sajian_core::domain::promotion::entities::Promotion;

/// Wire shape shared by the promotion handlers.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PromotionData {
    pub promotion_id: Uuid,
    pub name: String,
    pub description: String,
    pub discount_percentage: f64,
    pub discount_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub restaurant_id: Uuid,
    pub country_code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Promotion> for PromotionData {
    fn from(promotion: Promotion) -> Self {
        Self {
            promotion_id: promotion.id,
            name: promotion.name,
            description: promotion.description,
            discount_percentage: promotion.discount_percentage,
            discount_amount: promotion.discount_amount,
            start_date: promotion.start_date,
            end_date: promotion.end_date,
            restaurant_id: promotion.restaurant_id,
            country_code: promotion.country_code,
            created_at: promotion.created_at,
            updated_at: promotion.updated_at,
        }
    }
}
