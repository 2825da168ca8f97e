use crate::domain::{
    category::ports::CategoryRepository,
    common::{
        entities::app_errors::CoreError,
        queries::{ListParams, Paged},
        services::Service,
    },
    event::{
        entities::{CatalogEvent, EntityKind, EventAction},
        ports::EventPublisher,
        services::emit,
    },
    item_availability::ports::ItemAvailabilityRepository,
    item_price::ports::ItemPriceRepository,
    menu_item::ports::MenuItemRepository,
    modifier::{
        entities::Modifier,
        ports::{ModifierRepository, ModifierService},
        value_objects::{CreateModifierInput, UpdateModifierInput},
    },
    promotion::ports::PromotionRepository,
};
use uuid::Uuid;

impl<CA, MI, MO, IP, IA, PM, EV> ModifierService for Service<CA, MI, MO, IP, IA, PM, EV>
where
    CA: CategoryRepository,
    MI: MenuItemRepository,
    MO: ModifierRepository,
    IP: ItemPriceRepository,
    IA: ItemAvailabilityRepository,
    PM: PromotionRepository,
    EV: EventPublisher,
{
    async fn list_modifiers(&self, params: ListParams) -> Result<Paged<Modifier>, CoreError> {
        let page = self.modifier_repository.list(params.clone()).await?;
        let meta = params.page_meta(page.total_count);

        Ok(Paged {
            items: page.items,
            meta,
        })
    }

    async fn get_modifier(&self, modifier_id: Uuid) -> Result<Modifier, CoreError> {
        self.modifier_repository
            .get_by_id(modifier_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("modifier {modifier_id}")))
    }

    async fn create_modifier(&self, input: CreateModifierInput) -> Result<Modifier, CoreError> {
        if input.name.is_empty() {
            return Err(CoreError::Validation("modifier name is required".to_string()));
        }

        let modifier = Modifier::new(
            input.name,
            input.description,
            input.restaurant_id,
            input.country_code,
        );

        let created = self.modifier_repository.insert(modifier).await?;

        emit(
            &self.event_publisher,
            CatalogEvent::new(
                EntityKind::Modifier,
                EventAction::Created,
                created.id,
                created.restaurant_id,
                created.country_code.clone(),
            ),
        )
        .await?;

        Ok(created)
    }

    async fn update_modifier(&self, input: UpdateModifierInput) -> Result<Modifier, CoreError> {
        let mut modifier = self
            .modifier_repository
            .get_by_id(input.modifier_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("modifier {}", input.modifier_id)))?;

        modifier.update(
            input.name,
            input.description,
            input.restaurant_id,
            input.country_code,
        );

        let updated = self.modifier_repository.update(modifier).await?;

        emit(
            &self.event_publisher,
            CatalogEvent::new(
                EntityKind::Modifier,
                EventAction::Updated,
                updated.id,
                updated.restaurant_id,
                updated.country_code.clone(),
            ),
        )
        .await?;

        Ok(updated)
    }

    async fn delete_modifier(&self, modifier_id: Uuid) -> Result<(), CoreError> {
        let existing = self.modifier_repository.get_by_id(modifier_id).await?;

        self.modifier_repository.delete(modifier_id).await?;

        if let Some(modifier) = existing {
            emit(
                &self.event_publisher,
                CatalogEvent::new(
                    EntityKind::Modifier,
                    EventAction::Deleted,
                    modifier.id,
                    modifier.restaurant_id,
                    modifier.country_code,
                ),
            )
            .await?;
        }

        Ok(())
    }
}
