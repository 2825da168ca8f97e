use chrono::{TimeZone, Utc};

use crate::domain::category::entities::Category;
use crate::entity::categories::Model as CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        let created_at = Utc.from_utc_datetime(&model.created_at);
        let updated_at = Utc.from_utc_datetime(&model.updated_at);
        Category {
            id: model.id,
            name: model.name,
            description: model.description,
            restaurant_id: model.restaurant_id,
            country_code: model.country_code,
            created_at,
            updated_at,
        }
    }
}

impl From<&CategoryModel> for Category {
    fn from(model: &CategoryModel) -> Self {
        Category::from(model.clone())
    }
}
