use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub restaurant_id: Uuid,

    #[validate(length(equal = 2, message = "country_code must be 2 characters"))]
    pub country_code: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub restaurant_id: Option<Uuid>,

    #[serde(default)]
    #[validate(length(equal = 2, message = "country_code must be 2 characters"))]
    pub country_code: Option<String>,
}
