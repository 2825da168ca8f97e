use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        queries::{ListParams, Page, Paged},
    },
    item_availability::{
        entities::ItemAvailability,
        value_objects::{CreateItemAvailabilityInput, UpdateItemAvailabilityInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ItemAvailabilityService: Send + Sync {
    fn list_item_availability(
        &self,
        item_id: Uuid,
        params: ListParams,
    ) -> impl Future<Output = Result<Paged<ItemAvailability>, CoreError>> + Send;

    fn create_item_availability(
        &self,
        input: CreateItemAvailabilityInput,
    ) -> impl Future<Output = Result<ItemAvailability, CoreError>> + Send;

    fn update_item_availability(
        &self,
        input: UpdateItemAvailabilityInput,
    ) -> impl Future<Output = Result<ItemAvailability, CoreError>> + Send;

    fn delete_item_availability(
        &self,
        availability_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ItemAvailabilityRepository: Send + Sync {
    fn list_by_item(
        &self,
        item_id: Uuid,
        params: ListParams,
    ) -> impl Future<Output = Result<Page<ItemAvailability>, CoreError>> + Send;

    fn get_by_id(
        &self,
        availability_id: Uuid,
    ) -> impl Future<Output = Result<Option<ItemAvailability>, CoreError>> + Send;

    fn insert(
        &self,
        availability: ItemAvailability,
    ) -> impl Future<Output = Result<ItemAvailability, CoreError>> + Send;

    fn update(
        &self,
        availability: ItemAvailability,
    ) -> impl Future<Output = Result<ItemAvailability, CoreError>> + Send;

    fn delete(&self, availability_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
