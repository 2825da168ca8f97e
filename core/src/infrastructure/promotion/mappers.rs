use chrono::{TimeZone, Utc};

use crate::domain::promotion::entities::Promotion;
use crate::entity::promotions::Model as PromotionModel;

impl From<PromotionModel> for Promotion {
    fn from(model: PromotionModel) -> Self {
        let created_at = Utc.from_utc_datetime(&model.created_at);
        let updated_at = Utc.from_utc_datetime(&model.updated_at);
        Promotion {
            id: model.id,
            name: model.name,
            description: model.description,
            discount_percentage: model.discount_percentage,
            discount_amount: model.discount_amount,
            start_date: model.start_date,
            end_date: model.end_date,
            restaurant_id: model.restaurant_id,
            country_code: model.country_code,
            created_at,
            updated_at,
        }
    }
}

impl From<&PromotionModel> for Promotion {
    fn from(model: &PromotionModel) -> Self {
        Promotion::from(model.clone())
    }
}
