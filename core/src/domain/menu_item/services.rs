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
    menu_item::{
        entities::MenuItem,
        ports::{MenuItemRepository, MenuItemService},
        value_objects::{CreateMenuItemInput, UpdateMenuItemInput},
    },
    modifier::ports::ModifierRepository,
    promotion::ports::PromotionRepository,
};
use uuid::Uuid;

impl<CA, MI, MO, IP, IA, PM, EV> MenuItemService for Service<CA, MI, MO, IP, IA, PM, EV>
where
    CA: CategoryRepository,
    MI: MenuItemRepository,
    MO: ModifierRepository,
    IP: ItemPriceRepository,
    IA: ItemAvailabilityRepository,
    PM: PromotionRepository,
    EV: EventPublisher,
{
    async fn list_menu_items(&self, params: ListParams) -> Result<Paged<MenuItem>, CoreError> {
        let page = self.item_repository.list(params.clone()).await?;
        let meta = params.page_meta(page.total_count);

        Ok(Paged {
            items: page.items,
            meta,
        })
    }

    async fn get_menu_item(&self, item_id: Uuid) -> Result<MenuItem, CoreError> {
        self.item_repository
            .get_by_id(item_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("menu item {item_id}")))
    }

    async fn create_menu_item(&self, input: CreateMenuItemInput) -> Result<MenuItem, CoreError> {
        if input.name.is_empty() {
            return Err(CoreError::Validation("menu item name is required".to_string()));
        }

        let created = self.item_repository.insert(MenuItem::new(input)).await?;

        emit(
            &self.event_publisher,
            CatalogEvent::new(
                EntityKind::MenuItem,
                EventAction::Created,
                created.id,
                created.restaurant_id,
                created.country_code.clone(),
            ),
        )
        .await?;

        Ok(created)
    }

    async fn update_menu_item(&self, input: UpdateMenuItemInput) -> Result<MenuItem, CoreError> {
        let mut item = self
            .item_repository
            .get_by_id(input.item_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("menu item {}", input.item_id)))?;

        item.update(
            input.name,
            input.description,
            input.available_status,
            input.preparation_time,
            input.is_customizable,
            input.category_id,
            input.restaurant_id,
            input.country_code,
        );

        let updated = self.item_repository.update(item).await?;

        emit(
            &self.event_publisher,
            CatalogEvent::new(
                EntityKind::MenuItem,
                EventAction::Updated,
                updated.id,
                updated.restaurant_id,
                updated.country_code.clone(),
            ),
        )
        .await?;

        Ok(updated)
    }

    async fn delete_menu_item(&self, item_id: Uuid) -> Result<(), CoreError> {
        let existing = self.item_repository.get_by_id(item_id).await?;

        self.item_repository.delete(item_id).await?;

        if let Some(item) = existing {
            emit(
                &self.event_publisher,
                CatalogEvent::new(
                    EntityKind::MenuItem,
                    EventAction::Deleted,
                    item.id,
                    item.restaurant_id,
                    item.country_code,
                ),
            )
            .await?;
        }

        Ok(())
    }
}
