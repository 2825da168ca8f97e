pub mod create_modifier;
pub mod delete_modifier;
pub mod get_modifier;
pub mod get_modifiers;
pub mod update_modifier;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use sajian_core::domain::modifier::entities::Modifier;

/// Wire shape shared by the modifier handlers.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ModifierData {
    pub modifier_id: Uuid,
    pub name: String,
    pub description: String,
    pub restaurant_id: Uuid,
    pub country_code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Modifier> for ModifierData {
    fn from(modifier: Modifier) -> Self {
        Self {
            modifier_id: modifier.id,
            name: modifier.name,
            description: modifier.description,
            restaurant_id: modifier.restaurant_id,
            country_code: modifier.country_code,
            created_at: modifier.created_at,
            updated_at: modifier.updated_at,
        }
    }
}
