use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

/// A menu category, owned by a restaurant and tagged with a country code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub restaurant_id: Uuid,
    pub country_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn new(
        name: String,
        description: String,
        restaurant_id: Uuid,
        country_code: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            name,
            description,
            restaurant_id,
            country_code,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        restaurant_id: Option<Uuid>,
        country_code: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
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
