pub mod create_menu_item;
pub mod delete_menu_item;
pub mod get_menu_item;
pub mod get_menu_items;
pub mod update_menu_item;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use sajian_core::domain::menu_item::entities::MenuItem;

/// Wire shape shared by the menu item handlers.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MenuItemData {
    pub item_id: Uuid,
    pub name: String,
    pub description: String,
    pub available_status: bool,
    pub preparation_time: i32,
    pub is_customizable: bool,
    pub category_id: Option<Uuid>,
    pub restaurant_id: Uuid,
    pub country_code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<MenuItem> for MenuItemData {
    fn from(item: MenuItem) -> Self {
        Self {
            item_id: item.id,
            name: item.name,
            description: item.description,
            available_status: item.available_status,
            preparation_time: item.preparation_time,
            is_customizable: item.is_customizable,
            category_id: item.category_id,
            restaurant_id: item.restaurant_id,
            country_code: item.country_code,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
