use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::common::{
    entities::app_errors::CoreError,
    queries::{ListParams, Page},
};
use crate::domain::menu_item::{entities::MenuItem, ports::MenuItemRepository};
use crate::entity::menu_items::{
    ActiveModel as MenuItemActiveModel, Column as MenuItemColumn, Entity as MenuItemEntity,
};
use crate::infrastructure::common::queries::{QueryableEntity, fetch_page};

impl QueryableEntity for MenuItemEntity {
    fn restaurant_column() -> Self::Column {
        MenuItemColumn::RestaurantId
    }

    fn country_column() -> Self::Column {
        MenuItemColumn::CountryCode
    }

    fn search_columns() -> Option<(Self::Column, Self::Column)> {
        Some((MenuItemColumn::Name, MenuItemColumn::Description))
    }

    fn sort_column(field: &str) -> Option<Self::Column> {
        match field {
            "name" => Some(MenuItemColumn::Name),
            "preparation_time" => Some(MenuItemColumn::PreparationTime),
            "country_code" => Some(MenuItemColumn::CountryCode),
            "created_at" => Some(MenuItemColumn::CreatedAt),
            "updated_at" => Some(MenuItemColumn::UpdatedAt),
            _ => None,
        }
    }

    fn created_at_column() -> Self::Column {
        MenuItemColumn::CreatedAt
    }
}

#[derive(Debug, Clone)]
pub struct PostgresMenuItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresMenuItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(item: &MenuItem) -> MenuItemActiveModel {
    MenuItemActiveModel {
        id: Set(item.id),
        name: Set(item.name.clone()),
        description: Set(item.description.clone()),
        available_status: Set(item.available_status),
        preparation_time: Set(item.preparation_time),
        is_customizable: Set(item.is_customizable),
        category_id: Set(item.category_id),
        restaurant_id: Set(item.restaurant_id),
        country_code: Set(item.country_code.clone()),
        created_at: Set(item.created_at.naive_utc()),
        updated_at: Set(item.updated_at.naive_utc()),
    }
}

impl MenuItemRepository for PostgresMenuItemRepository {
    async fn list(&self, params: ListParams) -> Result<Page<MenuItem>, CoreError> {
        let page = fetch_page(&self.db, MenuItemEntity::find(), &params).await?;

        Ok(Page {
            items: page.items.into_iter().map(MenuItem::from).collect(),
            total_count: page.total_count,
        })
    }

    async fn get_by_id(&self, item_id: Uuid) -> Result<Option<MenuItem>, CoreError> {
        let item = MenuItemEntity::find()
            .filter(MenuItemColumn::Id.eq(item_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("failed to get menu item by id: {}", e);
                CoreError::Storage(e.to_string())
            })?
            .map(MenuItem::from);

        Ok(item)
    }

    async fn insert(&self, item: MenuItem) -> Result<MenuItem, CoreError> {
        let created = MenuItemEntity::insert(active_model(&item))
            .exec_with_returning(&self.db)
            .await
            .map(MenuItem::from)
            .map_err(|e| {
                error!("failed to create menu item: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(created)
    }

    async fn update(&self, item: MenuItem) -> Result<MenuItem, CoreError> {
        let updated = MenuItemEntity::update(active_model(&item))
            .filter(MenuItemColumn::Id.eq(item.id))
            .exec(&self.db)
            .await
            .map(MenuItem::from)
            .map_err(|e| {
                error!("failed to update menu item: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(updated)
    }

    async fn delete(&self, item_id: Uuid) -> Result<(), CoreError> {
        MenuItemEntity::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("failed to delete menu item: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(())
    }
}
