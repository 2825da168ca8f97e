use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::category::{entities::Category, ports::CategoryRepository};
use crate::domain::common::{
    entities::app_errors::CoreError,
    queries::{ListParams, Page},
};
use crate::entity::categories::{
    ActiveModel as CategoryActiveModel, Column as CategoryColumn, Entity as CategoryEntity,
};
use crate::infrastructure::common::queries::{QueryableEntity, fetch_page};

impl QueryableEntity for CategoryEntity {
    fn restaurant_column() -> Self::Column {
        CategoryColumn::RestaurantId
    }

    fn country_column() -> Self::Column {
        CategoryColumn::CountryCode
    }

    fn search_columns() -> Option<(Self::Column, Self::Column)> {
        Some((CategoryColumn::Name, CategoryColumn::Description))
    }

    fn sort_column(field: &str) -> Option<Self::Column> {
        match field {
            "name" => Some(CategoryColumn::Name),
            "country_code" => Some(CategoryColumn::CountryCode),
            "created_at" => Some(CategoryColumn::CreatedAt),
            "updated_at" => Some(CategoryColumn::UpdatedAt),
            _ => None,
        }
    }

    fn created_at_column() -> Self::Column {
        CategoryColumn::CreatedAt
    }
}

#[derive(Debug, Clone)]
pub struct PostgresCategoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CategoryRepository for PostgresCategoryRepository {
    async fn list(&self, params: ListParams) -> Result<Page<Category>, CoreError> {
        let page = fetch_page(&self.db, CategoryEntity::find(), &params).await?;

        Ok(Page {
            items: page.items.into_iter().map(Category::from).collect(),
            total_count: page.total_count,
        })
    }

    async fn get_by_id(&self, category_id: Uuid) -> Result<Option<Category>, CoreError> {
        let category = CategoryEntity::find()
            .filter(CategoryColumn::Id.eq(category_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("failed to get category by id: {}", e);
                CoreError::Storage(e.to_string())
            })?
            .map(Category::from);

        Ok(category)
    }

    async fn insert(&self, category: Category) -> Result<Category, CoreError> {
        let created = CategoryEntity::insert(CategoryActiveModel {
            id: Set(category.id),
            name: Set(category.name),
            description: Set(category.description),
            restaurant_id: Set(category.restaurant_id),
            country_code: Set(category.country_code),
            created_at: Set(category.created_at.naive_utc()),
            updated_at: Set(category.updated_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Category::from)
        .map_err(|e| {
            error!("failed to create category: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        Ok(created)
    }

    async fn update(&self, category: Category) -> Result<Category, CoreError> {
        let updated = CategoryEntity::update(CategoryActiveModel {
            id: Set(category.id),
            name: Set(category.name),
            description: Set(category.description),
            restaurant_id: Set(category.restaurant_id),
            country_code: Set(category.country_code),
            created_at: Set(category.created_at.naive_utc()),
            updated_at: Set(category.updated_at.naive_utc()),
        })
        .filter(CategoryColumn::Id.eq(category.id))
        .exec(&self.db)
        .await
        .map(Category::from)
        .map_err(|e| {
            error!("failed to update category: {}", e);
            CoreError::Storage(e.to_string())
        })?;

        Ok(updated)
    }

    async fn delete(&self, category_id: Uuid) -> Result<(), CoreError> {
        CategoryEntity::delete_by_id(category_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("failed to delete category: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(())
    }
}
