use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        queries::{ListParams, Page, Paged},
    },
    item_price::{
        entities::ItemPrice,
        value_objects::{CreateItemPriceInput, UpdateItemPriceInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ItemPriceService: Send + Sync {
    /// Prices carry no searchable text; the search term in `params` is
    /// ignored by the store.
    fn list_item_prices(
        &self,
        item_id: Uuid,
        params: ListParams,
    ) -> impl Future<Output = Result<Paged<ItemPrice>, CoreError>> + Send;

    fn create_item_price(
        &self,
        input: CreateItemPriceInput,
    ) -> impl Future<Output = Result<ItemPrice, CoreError>> + Send;

    fn update_item_price(
        &self,
        input: UpdateItemPriceInput,
    ) -> impl Future<Output = Result<ItemPrice, CoreError>> + Send;

    fn delete_item_price(
        &self,
        price_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ItemPriceRepository: Send + Sync {
    fn list_by_item(
        &self,
        item_id: Uuid,
        params: ListParams,
    ) -> impl Future<Output = Result<Page<ItemPrice>, CoreError>> + Send;

    fn get_by_id(
        &self,
        price_id: Uuid,
    ) -> impl Future<Output = Result<Option<ItemPrice>, CoreError>> + Send;

    fn insert(
        &self,
        price: ItemPrice,
    ) -> impl Future<Output = Result<ItemPrice, CoreError>> + Send;

    fn update(
        &self,
        price: ItemPrice,
    ) -> impl Future<Output = Result<ItemPrice, CoreError>> + Send;

    fn delete(&self, price_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
