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
    modifier::ports::ModifierRepository,
    promotion::{
        entities::Promotion,
        ports::{PromotionRepository, PromotionService},
        value_objects::{CreatePromotionInput, UpdatePromotionInput},
    },
};
use uuid::Uuid;

impl<CA, MI, MO, IP, IA, PM, EV> PromotionService for Service<CA, MI, MO, IP, IA, PM, EV>
where
    CA: CategoryRepository,
    MI: MenuItemRepository,
    MO: ModifierRepository,
    IP: ItemPriceRepository,
    IA: ItemAvailabilityRepository,
    PM: PromotionRepository,
    EV: EventPublisher,
{
    async fn list_promotions(&self, params: ListParams) -> Result<Paged<Promotion>, CoreError> {
        let page = self.promotion_repository.list(params.clone()).await?;
        let meta = params.page_meta(page.total_count);

        Ok(Paged {
            items: page.items,
            meta,
        })
    }

    async fn get_promotion(&self, promotion_id: Uuid) -> Result<Promotion, CoreError> {
        self.promotion_repository
            .get_by_id(promotion_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("promotion {promotion_id}")))
    }

    async fn create_promotion(&self, input: CreatePromotionInput) -> Result<Promotion, CoreError> {
        if input.name.is_empty() {
            return Err(CoreError::Validation("promotion name is required".to_string()));
        }

        let created = self
            .promotion_repository
            .insert(Promotion::new(input))
            .await?;

        emit(
            &self.event_publisher,
            CatalogEvent::new(
                EntityKind::Promotion,
                EventAction::Created,
                created.id,
                created.restaurant_id,
                created.country_code.clone(),
            ),
        )
        .await?;

        Ok(created)
    }

    async fn update_promotion(&self, input: UpdatePromotionInput) -> Result<Promotion, CoreError> {
        let mut promotion = self
            .promotion_repository
            .get_by_id(input.promotion_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("promotion {}", input.promotion_id)))?;

        promotion.update(
            input.name,
            input.description,
            input.discount_percentage,
            input.discount_amount,
            input.start_date,
            input.end_date,
            input.restaurant_id,
            input.country_code,
        );

        let updated = self.promotion_repository.update(promotion).await?;

        emit(
            &self.event_publisher,
            CatalogEvent::new(
                EntityKind::Promotion,
                EventAction::Updated,
                updated.id,
                updated.restaurant_id,
                updated.country_code.clone(),
            ),
        )
        .await?;

        Ok(updated)
    }

    async fn delete_promotion(&self, promotion_id: Uuid) -> Result<(), CoreError> {
        let existing = self.promotion_repository.get_by_id(promotion_id).await?;

        self.promotion_repository.delete(promotion_id).await?;

        if let Some(promotion) = existing {
            emit(
                &self.event_publisher,
                CatalogEvent::new(
                    EntityKind::Promotion,
                    EventAction::Deleted,
                    promotion.id,
                    promotion.restaurant_id,
                    promotion.country_code,
                ),
            )
            .await?;
        }

        Ok(())
    }
}
