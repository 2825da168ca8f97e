use uuid::Uuid;

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        queries::{ListParams, Page, Paged},
    },
    modifier::{
        entities::Modifier,
        value_objects::{CreateModifierInput, UpdateModifierInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ModifierService: Send + Sync {
    fn list_modifiers(
        &self,
        params: ListParams,
    ) -> impl Future<Output = Result<Paged<Modifier>, CoreError>> + Send;

    fn get_modifier(
        &self,
        modifier_id: Uuid,
    ) -> impl Future<Output = Result<Modifier, CoreError>> + Send;

    fn create_modifier(
        &self,
        input: CreateModifierInput,
    ) -> impl Future<Output = Result<Modifier, CoreError>> + Send;

    fn update_modifier(
        &self,
        input: UpdateModifierInput,
    ) -> impl Future<Output = Result<Modifier, CoreError>> + Send;

    fn delete_modifier(
        &self,
        modifier_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ModifierRepository: Send + Sync {
    fn list(
        &self,
        params: ListParams,
    ) -> impl Future<Output = Result<Page<Modifier>, CoreError>> + Send;

    fn get_by_id(
        &self,
        modifier_id: Uuid,
    ) -> impl Future<Output = Result<Option<Modifier>, CoreError>> + Send;

    fn insert(
        &self,
        modifier: Modifier,
    ) -> impl Future<Output = Result<Modifier, CoreError>> + Send;

    fn update(
        &self,
        modifier: Modifier,
    ) -> impl Future<Output = Result<Modifier, CoreError>> + Send;

    fn delete(&self, modifier_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
