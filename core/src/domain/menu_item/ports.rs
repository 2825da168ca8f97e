use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        queries::{ListParams, Page, Paged},
    },
    menu_item::{
        entities::MenuItem,
        value_objects::{CreateMenuItemInput, UpdateMenuItemInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MenuItemService: Send + Sync {
    fn list_menu_items(
        &self,
        params: ListParams,
    ) -> impl Future<Output = Result<Paged<MenuItem>, CoreError>> + Send;

    fn get_menu_item(
        &self,
        item_id: Uuid,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    fn create_menu_item(
        &self,
        input: CreateMenuItemInput,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    fn update_menu_item(
        &self,
        input: UpdateMenuItemInput,
    ) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    fn delete_menu_item(&self, item_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MenuItemRepository: Send + Sync {
    fn list(
        &self,
        params: ListParams,
    ) -> impl Future<Output = Result<Page<MenuItem>, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: Uuid,
    ) -> impl Future<Output = Result<Option<MenuItem>, CoreError>> + Send;

    fn insert(&self, item: MenuItem) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    fn update(&self, item: MenuItem) -> impl Future<Output = Result<MenuItem, CoreError>> + Send;

    fn delete(&self, item_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
