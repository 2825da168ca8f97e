use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        queries::{ListParams, Page, Paged},
    },
    promotion::{
        entities::Promotion,
        value_objects::{CreatePromotionInput, UpdatePromotionInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait PromotionService: Send + Sync {
    fn list_promotions(
        &self,
        params: ListParams,
    ) -> impl Future<Output = Result<Paged<Promotion>, CoreError>> + Send;

    fn get_promotion(
        &self,
        promotion_id: Uuid,
    ) -> impl Future<Output = Result<Promotion, CoreError>> + Send;

    fn create_promotion(
        &self,
        input: CreatePromotionInput,
    ) -> impl Future<Output = Result<Promotion, CoreError>> + Send;

    fn update_promotion(
        &self,
        input: UpdatePromotionInput,
    ) -> impl Future<Output = Result<Promotion, CoreError>> + Send;

    fn delete_promotion(
        &self,
        promotion_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PromotionRepository: Send + Sync {
    fn list(
        &self,
        params: ListParams,
    ) -> impl Future<Output = Result<Page<Promotion>, CoreError>> + Send;

    fn get_by_id(
        &self,
        promotion_id: Uuid,
    ) -> impl Future<Output = Result<Option<Promotion>, CoreError>> + Send;

    fn insert(
        &self,
        promotion: Promotion,
    ) -> impl Future<Output = Result<Promotion, CoreError>> + Send;

    fn update(
        &self,
        promotion: Promotion,
    ) -> impl Future<Output = Result<Promotion, CoreError>> + Send;

    fn delete(&self, promotion_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
