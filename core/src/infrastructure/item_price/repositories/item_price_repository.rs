use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::common::{
    entities::app_errors::CoreError,
    queries::{ListParams, Page},
};
use crate::domain::item_price::{entities::ItemPrice, ports::ItemPriceRepository};
use crate::entity::item_prices::{
    ActiveModel as ItemPriceActiveModel, Column as ItemPriceColumn, Entity as ItemPriceEntity,
};
use crate::infrastructure::common::queries::{QueryableEntity, fetch_page};

impl QueryableEntity for ItemPriceEntity {
    fn restaurant_column() -> Self::Column {
        ItemPriceColumn::RestaurantId
    }

    fn country_column() -> Self::Column {
        ItemPriceColumn::CountryCode
    }

    // Prices carry no searchable text.
    fn search_columns() -> Option<(Self::Column, Self::Column)> {
        None
    }

    fn sort_column(field: &str) -> Option<Self::Column> {
        match field {
            "price" => Some(ItemPriceColumn::Price),
            "start_date" => Some(ItemPriceColumn::StartDate),
            "created_at" => Some(ItemPriceColumn::CreatedAt),
            "updated_at" => Some(ItemPriceColumn::UpdatedAt),
            _ => None,
        }
    }

    fn created_at_column() -> Self::Column {
        ItemPriceColumn::CreatedAt
    }
}

#[derive(Debug, Clone)]
pub struct PostgresItemPriceRepository {
    pub db: DatabaseConnection,
}

impl PostgresItemPriceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(price: &ItemPrice) -> ItemPriceActiveModel {
    ItemPriceActiveModel {
        id: Set(price.id),
        item_id: Set(price.item_id),
        price: Set(price.price),
        cost_price: Set(price.cost_price),
        currency: Set(price.currency.clone()),
        start_date: Set(price.start_date),
        end_date: Set(price.end_date),
        restaurant_id: Set(price.restaurant_id),
        country_code: Set(price.country_code.clone()),
        created_at: Set(price.created_at.naive_utc()),
        updated_at: Set(price.updated_at.naive_utc()),
    }
}

impl ItemPriceRepository for PostgresItemPriceRepository {
    async fn list_by_item(
        &self,
        item_id: Uuid,
        params: ListParams,
    ) -> Result<Page<ItemPrice>, CoreError> {
        let base = ItemPriceEntity::find().filter(ItemPriceColumn::ItemId.eq(item_id));
        let page = fetch_page(&self.db, base, &params).await?;

        Ok(Page {
            items: page.items.into_iter().map(ItemPrice::from).collect(),
            total_count: page.total_count,
        })
    }

    async fn get_by_id(&self, price_id: Uuid) -> Result<Option<ItemPrice>, CoreError> {
        let price = ItemPriceEntity::find()
            .filter(ItemPriceColumn::Id.eq(price_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("failed to get item price by id: {}", e);
                CoreError::Storage(e.to_string())
            })?
            .map(ItemPrice::from);

        Ok(price)
    }

    async fn insert(&self, price: ItemPrice) -> Result<ItemPrice, CoreError> {
        let created = ItemPriceEntity::insert(active_model(&price))
            .exec_with_returning(&self.db)
            .await
            .map(ItemPrice::from)
            .map_err(|e| {
                error!("failed to create item price: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(created)
    }

    async fn update(&self, price: ItemPrice) -> Result<ItemPrice, CoreError> {
        let updated = ItemPriceEntity::update(active_model(&price))
            .filter(ItemPriceColumn::Id.eq(price.id))
            .exec(&self.db)
            .await
            .map(ItemPrice::from)
            .map_err(|e| {
                error!("failed to update item price: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(updated)
    }

    async fn delete(&self, price_id: Uuid) -> Result<(), CoreError> {
        ItemPriceEntity::delete_by_id(price_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("failed to delete item price: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(())
    }
}
