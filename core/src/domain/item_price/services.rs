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
    item_price::{
        entities::ItemPrice,
        ports::{ItemPriceRepository, ItemPriceService},
        value_objects::{CreateItemPriceInput, UpdateItemPriceInput},
    },
    menu_item::ports::MenuItemRepository,
    modifier::ports::ModifierRepository,
    promotion::ports::PromotionRepository,
};
use uuid::Uuid;

impl<CA, MI, MO, IP, IA, PM, EV> ItemPriceService for Service<CA, MI, MO, IP, IA, PM, EV>
where
    CA: CategoryRepository,
    MI: MenuItemRepository,
    MO: ModifierRepository,
    IP: ItemPriceRepository,
    IA: ItemAvailabilityRepository,
    PM: PromotionRepository,
    EV: EventPublisher,
{
    async fn list_item_prices(
        &self,
        item_id: Uuid,
        params: ListParams,
    ) -> Result<Paged<ItemPrice>, CoreError> {
        let page = self
            .price_repository
            .list_by_item(item_id, params.clone())
            .await?;
        let meta = params.page_meta(page.total_count);

        Ok(Paged {
            items: page.items,
            meta,
        })
    }

    async fn create_item_price(&self, input: CreateItemPriceInput) -> Result<ItemPrice, CoreError> {
        // The priced item must exist; a price against an unknown item is a
        // caller error, not a storage one.
        self.item_repository
            .get_by_id(input.item_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("menu item {}", input.item_id)))?;

        let created = self.price_repository.insert(ItemPrice::new(input)).await?;

        emit(
            &self.event_publisher,
            CatalogEvent::new(
                EntityKind::ItemPrice,
                EventAction::Created,
                created.id,
                created.restaurant_id,
                created.country_code.clone(),
            ),
        )
        .await?;

        Ok(created)
    }

    async fn update_item_price(&self, input: UpdateItemPriceInput) -> Result<ItemPrice, CoreError> {
        let mut price = self
            .price_repository
            .get_by_id(input.price_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("item price {}", input.price_id)))?;

        price.update(
            input.price,
            input.cost_price,
            input.currency,
            input.start_date,
            input.end_date,
        );

        let updated = self.price_repository.update(price).await?;

        emit(
            &self.event_publisher,
            CatalogEvent::new(
                EntityKind::ItemPrice,
                EventAction::Updated,
                updated.id,
                updated.restaurant_id,
                updated.country_code.clone(),
            ),
        )
        .await?;

        Ok(updated)
    }

    async fn delete_item_price(&self, price_id: Uuid) -> Result<(), CoreError> {
        let existing = self.price_repository.get_by_id(price_id).await?;

        self.price_repository.delete(price_id).await?;

        if let Some(price) = existing {
            emit(
                &self.event_publisher,
                CatalogEvent::new(
                    EntityKind::ItemPrice,
                    EventAction::Deleted,
                    price.id,
                    price.restaurant_id,
                    price.country_code,
                ),
            )
            .await?;
        }

        Ok(())
    }
}
