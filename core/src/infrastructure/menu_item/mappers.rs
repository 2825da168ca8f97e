use chrono::{TimeZone, Utc};

use crate::domain::menu_item::entities::MenuItem;
use crate::entity::menu_items::Model as MenuItemModel;

impl From<MenuItemModel> for MenuItem {
    fn from(model: MenuItemModel) -> Self {
        let created_at = Utc.from_utc_datetime(&model.created_at);
        let updated_at = Utc.from_utc_datetime(&model.updated_at);
        MenuItem {
            id: model.id,
            name: model.name,
            description: model.description,
            available_status: model.available_status,
            preparation_time: model.preparation_time,
            is_customizable: model.is_customizable,
            category_id: model.category_id,
            restaurant_id: model.restaurant_id,
            country_code: model.country_code,
            created_at,
            updated_at,
        }
    }
}

impl From<&MenuItemModel> for MenuItem {
    fn from(model: &MenuItemModel) -> Self {
        MenuItem::from(model.clone())
    }
}
