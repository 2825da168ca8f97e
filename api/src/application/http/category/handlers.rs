pub mod create_category;
pub mod delete_category;
pub mod get_categories;
pub mod get_category;
pub mod update_category;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use sajian_core::domain::category::entities::Category;

/// Wire shape shared by the category handlers.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoryData {
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub restaurant_id: Uuid,
    pub country_code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Category> for CategoryData {
    fn from(category: Category) -> Self {
        Self {
            category_id: category.id,
            name: category.name,
            description: category.description,
            restaurant_id: category.restaurant_id,
            country_code: category.country_code,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
