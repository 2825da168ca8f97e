use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::common::{
    entities::app_errors::CoreError,
    queries::{ListParams, Page},
};
use crate::domain::modifier::{entities::Modifier, ports::ModifierRepository};
use crate::entity::modifiers::{
    ActiveModel as ModifierActiveModel, Column as ModifierColumn, Entity as ModifierEntity,
};
use crate::infrastructure::common::queries::{QueryableEntity, fetch_page};

impl QueryableEntity for ModifierEntity {
    fn restaurant_column() -> Self::Column {
        ModifierColumn::RestaurantId
    }

    fn country_column() -> Self::Column {
        ModifierColumn::CountryCode
    }

    fn search_columns() -> Option<(Self::Column, Self::Column)> {
        Some((ModifierColumn::Name, ModifierColumn::Description))
    }

    fn sort_column(field: &str) -> Option<Self::Column> {
        match field {
            "name" => Some(ModifierColumn::Name),
            "country_code" => Some(ModifierColumn::CountryCode),
            "created_at" => Some(ModifierColumn::CreatedAt),
            "updated_at" => Some(ModifierColumn::UpdatedAt),
            _ => None,
        }
    }

    fn created_at_column() -> Self::Column {
        ModifierColumn::CreatedAt
    }
}

#[derive(Debug, Clone)]
pub struct PostgresModifierRepository {
    pub db: DatabaseConnection,
}

impl PostgresModifierRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ModifierRepository for PostgresModifierRepository {
    async fn list(&self, params: ListParams) -> Result<Page<Modifier>, CoreError> {
        let page = fetch_page(&self.db, ModifierEntity::find(), &params).await?;

        Ok(Page {
            items: page.items.into_iter().map(Modifier::from).collect(),
            total_count: page.total_count,
        })
    }

    async fn get_by_id(&self, modifier_id: Uuid) -> Result<Option<Modifier>, CoreError> {
        let modifier = ModifierEntity::find()
            .filter(ModifierColumn::Id.eq(modifier_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("failed to get modifier by id: {}", e);
                CoreError::Storage(e.to_string())
            })?
            .map(Modifier::from);

        Ok(modifier)
    }

    async fn insert(&self, modifier: Modifier) -> Result<Modifier, CoreError> {
        let created = ModifierEntity::insert(ModifierActiveModel {
            id: Set(modifier.id),
            name: Set(modifier.name),
            description: Set(modifier.description),
            restaurant_id: Set(modifier.restaurant_id),
            country_code: Set(modifier.country_code),
            created_at: Set(modifier.created_at.naive_utc()),
            updated_at: Set(modifier.updated_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Modifier::from)
        .map_err(|e| {
            error!("failed to create modifier: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        Ok(created)
    }

    async fn update(&self, modifier: Modifier) -> Result<Modifier, CoreError> {
        let updated = ModifierEntity::update(ModifierActiveModel {
            id: Set(modifier.id),
            name: Set(modifier.name),
            description: Set(modifier.description),
            restaurant_id: Set(modifier.restaurant_id),
            country_code: Set(modifier.country_code),
            created_at: Set(modifier.created_at.naive_utc()),
            updated_at: Set(modifier.updated_at.naive_utc()),
        })
        .filter(ModifierColumn::Id.eq(modifier.id))
        .exec(&self.db)
        .await
        .map(Modifier::from)
        .map_err(|e| {
            error!("failed to update modifier: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        Ok(updated)
    }

    async fn delete(&self, modifier_id: Uuid) -> Result<(), CoreError> {
        ModifierEntity::delete_by_id(modifier_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("failed to delete modifier: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(())
    }
}
