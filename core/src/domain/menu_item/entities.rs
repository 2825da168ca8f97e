use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;
use crate::domain::menu_item::value_objects::CreateMenuItemInput;

/// A sellable menu item, optionally attached to a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub available_status: bool,
    pub preparation_time: i32,
    pub is_customizable: bool,
    pub category_id: Option<Uuid>,
    pub restaurant_id: Uuid,
    pub country_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    pub fn new(input: CreateMenuItemInput) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            name: input.name,
            description: input.description,
            available_status: input.available_status,
            preparation_time: input.preparation_time,
            is_customizable: input.is_customizable,
            category_id: input.category_id,
            restaurant_id: input.restaurant_id,
            country_code: input.country_code,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        available_status: Option<bool>,
        preparation_time: Option<i32>,
        is_customizable: Option<bool>,
        category_id: Option<Uuid>,
        restaurant_id: Option<Uuid>,
        country_code: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(available_status) = available_status {
            self.available_status = available_status;
        }
        if let Some(preparation_time) = preparation_time {
            self.preparation_time = preparation_time;
        }
        if let Some(is_customizable) = is_customizable {
            self.is_customizable = is_customizable;
        }
        if let Some(category_id) = category_id {
            self.category_id = Some(category_id);
        }
        if let Some(restaurant_id) = restaurant_id {
            self.restaurant_id = restaurant_id;
        }
        if let Some(country_code) = country_code {
            self.country_code = country_code;
        }
        self.updated_at = Utc::now();
    }
}
