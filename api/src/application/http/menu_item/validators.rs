use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

fn default_available_status() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMenuItemValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_available_status")]
    pub available_status: bool,

    #[serde(default)]
    #[validate(range(min = 0, message = "preparation_time must not be negative"))]
    pub preparation_time: i32,

    #[serde(default)]
    pub is_customizable: bool,

    #[serde(default)]
    pub category_id: Option<Uuid>,

    pub restaurant_id: Uuid,

    #[validate(length(equal = 2, message = "country_code must be 2 characters"))]
    pub country_code: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMenuItemValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub available_status: Option<bool>,

    #[serde(default)]
    #[validate(range(min = 0, message = "preparation_time must not be negative"))]
    pub preparation_time: Option<i32>,

    #[serde(default)]
    pub is_customizable: Option<bool>,

    #[serde(default)]
    pub category_id: Option<Uuid>,

    #[serde(default)]
    pub restaurant_id: Option<Uuid>,

    #[serde(default)]
    #[validate(length(equal = 2, message = "country_code must be 2 characters"))]
    pub country_code: Option<String>,
}
