use uuid::Uuid;

use crate::domain::{
    category::{
        entities::Category,
        value_objects::{CreateCategoryInput, UpdateCategoryInput},
    },
    common::{
        entities::app_errors::CoreError,
        queries::{ListParams, Page, Paged},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait CategoryService: Send + Sync {
    fn list_categories(
        &self,
        params: ListParams,
    ) -> impl Future<Output = Result<Paged<Category>, CoreError>> + Send;

    fn get_category(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn create_category(
        &self,
        input: CreateCategoryInput,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn update_category(
        &self,
        input: UpdateCategoryInput,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn delete_category(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CategoryRepository: Send + Sync {
    /// Returns the rows of the requested window plus the count of all rows
    /// matching filter and search, ignoring pagination.
    fn list(
        &self,
        params: ListParams,
    ) -> impl Future<Output = Result<Page<Category>, CoreError>> + Send;

    fn get_by_id(
        &self,
        category_id: Uuid,
    ) -> impl Future<Output = Result<Option<Category>, CoreError>> + Send;

    fn insert(
        &self,
        category: Category,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn update(
        &self,
        category: Category,
    ) -> impl Future<Output = Result<Category, CoreError>> + Send;

    fn delete(&self, category_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
