use chrono::{TimeZone, Utc};

use crate::domain::modifier::entities::Modifier;
use crate::entity::modifiers::Model as ModifierModel;

impl From<ModifierModel> for Modifier {
    fn from(model: ModifierModel) -> Self {
        let created_at = Utc.from_utc_datetime(&model.created_at);
        let updated_at = Utc.from_utc_datetime(&model.updated_at);
        Modifier {
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

impl From<&ModifierModel> for Modifier {
    fn from(model: &ModifierModel) -> Self {
        Modifier::from(model.clone())
    }
}
