use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::common::{
    entities::app_errors::CoreError,
    queries::{ListParams, Page},
};
use crate::domain::item_availability::{
    entities::ItemAvailability, ports::ItemAvailabilityRepository,
};
use crate::entity::item_availability::{
    ActiveModel as ItemAvailabilityActiveModel, Column as ItemAvailabilityColumn,
    Entity as ItemAvailabilityEntity,
};
use crate::infrastructure::common::queries::{QueryableEntity, fetch_page};

impl QueryableEntity for ItemAvailabilityEntity {
    fn restaurant_column() -> Self::Column {
        ItemAvailabilityColumn::RestaurantId
    }

    fn country_column() -> Self::Column {
        ItemAvailabilityColumn::CountryCode
    }

    fn search_columns() -> Option<(Self::Column, Self::Column)> {
        None
    }

    fn sort_column(field: &str) -> Option<Self::Column> {
        match field {
            "start_date" => Some(ItemAvailabilityColumn::StartDate),
            "end_date" => Some(ItemAvailabilityColumn::EndDate),
            "created_at" => Some(ItemAvailabilityColumn::CreatedAt),
            _ => None,
        }
    }

    fn created_at_column() -> Self::Column {
        ItemAvailabilityColumn::CreatedAt
    }
}

#[derive(Debug, Clone)]
pub struct PostgresItemAvailabilityRepository {
    pub db: DatabaseConnection,
}

impl PostgresItemAvailabilityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(availability: &ItemAvailability) -> ItemAvailabilityActiveModel {
    ItemAvailabilityActiveModel {
        id: Set(availability.id),
        item_id: Set(availability.item_id),
        start_date: Set(availability.start_date),
        end_date: Set(availability.end_date),
        is_available: Set(availability.is_available),
        restaurant_id: Set(availability.restaurant_id),
        country_code: Set(availability.country_code.clone()),
        created_at: Set(availability.created_at.naive_utc()),
    }
}

impl ItemAvailabilityRepository for PostgresItemAvailabilityRepository {
    async fn list_by_item(
        &self,
        item_id: Uuid,
        params: ListParams,
    ) -> Result<Page<ItemAvailability>, CoreError> {
        let base = ItemAvailabilityEntity::find().filter(ItemAvailabilityColumn::ItemId.eq(item_id));
        let page = fetch_page(&self.db, base, &params).await?;

        Ok(Page {
            items: page.items.into_iter().map(ItemAvailability::from).collect(),
            total_count: page.total_count,
        })
    }

    async fn get_by_id(&self, availability_id: Uuid) -> Result<Option<ItemAvailability>, CoreError> {
        let availability = ItemAvailabilityEntity::find()
            .filter(ItemAvailabilityColumn::Id.eq(availability_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("failed to get item availability by id: {}", e);
                CoreError::Storage(e.to_string())
            })?
            .map(ItemAvailability::from);

        Ok(availability)
    }

    async fn insert(&self, availability: ItemAvailability) -> Result<ItemAvailability, CoreError> {
        let created = ItemAvailabilityEntity::insert(active_model(&availability))
            .exec_with_returning(&self.db)
            .await
            .map(ItemAvailability::from)
            .map_err(|e| {
                error!("failed to create item availability: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(created)
    }

    async fn update(&self, availability: ItemAvailability) -> Result<ItemAvailability, CoreError> {
        let updated = ItemAvailabilityEntity::update(active_model(&availability))
            .filter(ItemAvailabilityColumn::Id.eq(availability.id))
            .exec(&self.db)
            .await
            .map(ItemAvailability::from)
            .map_err(|e| {
                error!("failed to update item availability: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(updated)
    }

    async fn delete(&self, availability_id: Uuid) -> Result<(), CoreError> {
        ItemAvailabilityEntity::delete_by_id(availability_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("failed to delete item availability: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(())
    }
}
