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
    item_availability::{
        entities::ItemAvailability,
        ports::{ItemAvailabilityRepository, ItemAvailabilityService},
        value_objects::{CreateItemAvailabilityInput, UpdateItemAvailabilityInput},
    },
    item_price::ports::ItemPriceRepository,
    menu_item::ports::MenuItemRepository,
    modifier::ports::ModifierRepository,
    promotion::ports::PromotionRepository,
};
use uuid::Uuid;

impl<CA, MI, MO, IP, IA, PM, EV> ItemAvailabilityService for Service<CA, MI, MO, IP, IA, PM, EV>
where
    CA: CategoryRepository,
    MI: MenuItemRepository,
    MO: ModifierRepository,
    IP: ItemPriceRepository,
    IA: ItemAvailabilityRepository,
    PM: PromotionRepository,
    EV: EventPublisher,
{
    async fn list_item_availability(
        &self,
        item_id: Uuid,
        params: ListParams,
    ) -> Result<Paged<ItemAvailability>, CoreError> {
        let page = self
            .availability_repository
            .list_by_item(item_id, params.clone())
            .await?;
        let meta = params.page_meta(page.total_count);

        Ok(Paged {
            items: page.items,
            meta,
        })
    }

    async fn create_item_availability(
        &self,
        input: CreateItemAvailabilityInput,
    ) -> Result<ItemAvailability, CoreError> {
        self.item_repository
            .get_by_id(input.item_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("menu item {}", input.item_id)))?;

        let created = self
            .availability_repository
            .insert(ItemAvailability::new(input))
            .await?;

        emit(
            &self.event_publisher,
            CatalogEvent::new(
                EntityKind::ItemAvailability,
                EventAction::Created,
                created.id,
                created.restaurant_id,
                created.country_code.clone(),
            ),
        )
        .await?;

        Ok(created)
    }

    async fn update_item_availability(
        &self,
        input: UpdateItemAvailabilityInput,
    ) -> Result<ItemAvailability, CoreError> {
        let mut availability = self
            .availability_repository
            .get_by_id(input.availability_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!("item availability {}", input.availability_id))
            })?;

        availability.update(input.start_date, input.end_date, input.is_available);

        let updated = self.availability_repository.update(availability).await?;

        emit(
            &self.event_publisher,
            CatalogEvent::new(
                EntityKind::ItemAvailability,
                EventAction::Updated,
                updated.id,
                updated.restaurant_id,
                updated.country_code.clone(),
            ),
        )
        .await?;

        Ok(updated)
    }

    async fn delete_item_availability(&self, availability_id: Uuid) -> Result<(), CoreError> {
        let existing = self
            .availability_repository
            .get_by_id(availability_id)
            .await?;

        self.availability_repository.delete(availability_id).await?;

        if let Some(availability) = existing {
            emit(
                &self.event_publisher,
                CatalogEvent::new(
                    EntityKind::ItemAvailability,
                    EventAction::Deleted,
                    availability.id,
                    availability.restaurant_id,
                    availability.country_code,
                ),
            )
            .await?;
        }

        Ok(())
    }
}
