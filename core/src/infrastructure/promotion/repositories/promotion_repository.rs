use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::error;
use uuid::Uuid;

use crate::domain::common::{
    entities::app_errors::CoreError,
    queries::{ListParams, Page},
};
use crate::domain::promotion::{entities::Promotion, ports::PromotionRepository};
use crate::entity::promotions::{
    ActiveModel as PromotionActiveModel, Column as PromotionColumn, Entity as PromotionEntity,
};
use crate::infrastructure::common::queries::{QueryableEntity, fetch_page};

impl QueryableEntity for PromotionEntity {
    fn restaurant_column() -> Self::Column {
        PromotionColumn::RestaurantId
    }

    fn country_column() -> Self::Column {
        PromotionColumn::CountryCode
    }

    fn search_columns() -> Option<(Self::Column, Self::Column)> {
        Some((PromotionColumn::Name, PromotionColumn::Description))
    }

    fn sort_column(field: &str) -> Option<Self::Column> {
        match field {
            "name" => Some(PromotionColumn::Name),
            "start_date" => Some(PromotionColumn::StartDate),
            "end_date" => Some(PromotionColumn::EndDate),
            "country_code" => Some(PromotionColumn::CountryCode),
            "created_at" => Some(PromotionColumn::CreatedAt),
            "updated_at" => Some(PromotionColumn::UpdatedAt),
            _ => None,
        }
    }

    fn created_at_column() -> Self::Column {
        PromotionColumn::CreatedAt
    }
}

#[derive(Debug, Clone)]
pub struct PostgresPromotionRepository {
    pub db: DatabaseConnection,
}

impl PostgresPromotionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(promotion: &Promotion) -> PromotionActiveModel {
    PromotionActiveModel {
        id: Set(promotion.id),
        name: Set(promotion.name.clone()),
        description: Set(promotion.description.clone()),
        discount_percentage: Set(promotion.discount_percentage),
        discount_amount: Set(promotion.discount_amount),
        start_date: Set(promotion.start_date),
        end_date: Set(promotion.end_date),
        restaurant_id: Set(promotion.restaurant_id),
        country_code: Set(promotion.country_code.clone()),
        created_at: Set(promotion.created_at.naive_utc()),
        updated_at: Set(promotion.updated_at.naive_utc()),
    }
}

impl PromotionRepository for PostgresPromotionRepository {
    async fn list(&self, params: ListParams) -> Result<Page<Promotion>, CoreError> {
        let page = fetch_page(&self.db, PromotionEntity::find(), &params).await?;

        Ok(Page {
            items: page.items.into_iter().map(Promotion::from).collect(),
            total_count: page.total_count,
        })
    }

    async fn get_by_id(&self, promotion_id: Uuid) -> Result<Option<Promotion>, CoreError> {
        let promotion = PromotionEntity::find()
            .filter(PromotionColumn::Id.eq(promotion_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("failed to get promotion by id: {}", e);
                CoreError::Storage(e.to_string())
            })?
            .map(Promotion::from);

        Ok(promotion)
    }

    async fn insert(&self, promotion: Promotion) -> Result<Promotion, CoreError> {
        let created = PromotionEntity::insert(active_model(&promotion))
            .exec_with_returning(&self.db)
            .await
            .map(Promotion::from)
            .map_err(|e| {
                error!("failed to create promotion: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(created)
    }

    async fn update(&self, promotion: Promotion) -> Result<Promotion, CoreError> {
        let updated = PromotionEntity::update(active_model(&promotion))
            .filter(PromotionColumn::Id.eq(promotion.id))
            .exec(&self.db)
            .await
            .map(Promotion::from)
            .map_err(|e| {
                error!("failed to update promotion: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(updated)
    }

    async fn delete(&self, promotion_id: Uuid) -> Result<(), CoreError> {
        PromotionEntity::delete_by_id(promotion_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("failed to delete promotion: {}", e);
                CoreError::Storage(e.to_string())
            })?;

        Ok(())
    }
}
