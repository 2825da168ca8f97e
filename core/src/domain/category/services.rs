use crate::domain::{
    category::{
        entities::Category,
        ports::{CategoryRepository, CategoryService},
        value_objects::{CreateCategoryInput, UpdateCategoryInput},
    },
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
    promotion::ports::PromotionRepository,
};
use uuid::Uuid;

impl<CA, MI, MO, IP, IA, PM, EV> CategoryService for Service<CA, MI, MO, IP, IA, PM, EV>
where
    CA: CategoryRepository,
    MI: MenuItemRepository,
    MO: ModifierRepository,
    IP: ItemPriceRepository,
    IA: ItemAvailabilityRepository,
    PM: PromotionRepository,
    EV: EventPublisher,
{
    async fn list_categories(&self, params: ListParams) -> Result<Paged<Category>, CoreError> {
        let page = self.category_repository.list(params.clone()).await?;
        let meta = params.page_meta(page.total_count);

        Ok(Paged {
            items: page.items,
            meta,
        })
    }

    async fn get_category(&self, category_id: Uuid) -> Result<Category, CoreError> {
        self.category_repository
            .get_by_id(category_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("category {category_id}")))
    }

    async fn create_category(&self, input: CreateCategoryInput) -> Result<Category, CoreError> {
        if input.name.is_empty() {
            return Err(CoreError::Validation("category name is required".to_string()));
        }

        let category = Category::new(
            input.name,
            input.description,
            input.restaurant_id,
            input.country_code,
        );

        let created = self.category_repository.insert(category).await?;

        emit(
            &self.event_publisher,
            CatalogEvent::new(
                EntityKind::Category,
                EventAction::Created,
                created.id,
                created.restaurant_id,
                created.country_code.clone(),
            ),
        )
        .await?;

        Ok(created)
    }

    async fn update_category(&self, input: UpdateCategoryInput) -> Result<Category, CoreError> {
        let mut category = self
            .category_repository
            .get_by_id(input.category_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("category {}", input.category_id)))?;

        category.update(
            input.name,
            input.description,
            input.restaurant_id,
            input.country_code,
        );

        let updated = self.category_repository.update(category).await?;

        emit(
            &self.event_publisher,
            CatalogEvent::new(
                EntityKind::Category,
                EventAction::Updated,
                updated.id,
                updated.restaurant_id,
                updated.country_code.clone(),
            ),
        )
        .await?;

        Ok(updated)
    }

    async fn delete_category(&self, category_id: Uuid) -> Result<(), CoreError> {
        // Deleting an unknown id succeeds silently; the lookup only feeds the
        // change event.
        let existing = self.category_repository.get_by_id(category_id).await?;

        self.category_repository.delete(category_id).await?;

        if let Some(category) = existing {
            emit(
                &self.event_publisher,
                CatalogEvent::new(
                    EntityKind::Category,
                    EventAction::Deleted,
                    category.id,
                    category.restaurant_id,
                    category.country_code,
                ),
            )
            .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        category::ports::MockCategoryRepository,
        common::queries::Page,
        event::ports::MockEventPublisher,
        item_availability::ports::MockItemAvailabilityRepository,
        item_price::ports::MockItemPriceRepository,
        menu_item::ports::MockMenuItemRepository,
        modifier::ports::MockModifierRepository,
        promotion::ports::MockPromotionRepository,
    };

    type TestService = Service<
        MockCategoryRepository,
        MockMenuItemRepository,
        MockModifierRepository,
        MockItemPriceRepository,
        MockItemAvailabilityRepository,
        MockPromotionRepository,
        MockEventPublisher,
    >;

    fn service(
        category_repository: MockCategoryRepository,
        event_publisher: MockEventPublisher,
    ) -> TestService {
        Service::new(
            category_repository,
            MockMenuItemRepository::new(),
            MockModifierRepository::new(),
            MockItemPriceRepository::new(),
            MockItemAvailabilityRepository::new(),
            MockPromotionRepository::new(),
            event_publisher,
        )
    }

    fn category(name: &str) -> Category {
        Category::new(
            name.to_string(),
            "".to_string(),
            Uuid::new_v4(),
            "ID".to_string(),
        )
    }

    #[tokio::test]
    async fn create_with_empty_name_fails_before_any_storage_call() {
        // No expectations set: any repository or publisher call would panic.
        let service = service(MockCategoryRepository::new(), MockEventPublisher::new());

        let result = service
            .create_category(CreateCategoryInput {
                name: String::new(),
                description: "starters".to_string(),
                restaurant_id: Uuid::new_v4(),
                country_code: "ID".to_string(),
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            CoreError::Validation("category name is required".to_string())
        );
    }

    #[tokio::test]
    async fn create_persists_then_publishes() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_insert()
            .times(1)
            .returning(|category| Box::pin(async move { Ok(category) }));

        let mut publisher = MockEventPublisher::new();
        publisher
            .expect_publish()
            .times(1)
            .withf(|topic, _, _| topic.contains("catalog.category"))
            .returning(|_, _, _| Box::pin(async { Ok(()) }));

        let service = service(repository, publisher);

        let created = service
            .create_category(CreateCategoryInput {
                name: "Mains".to_string(),
                description: String::new(),
                restaurant_id: Uuid::new_v4(),
                country_code: "ID".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Mains");
    }

    #[tokio::test]
    async fn get_missing_category_is_not_found() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(repository, MockEventPublisher::new());
        let missing = Uuid::new_v4();

        assert_eq!(
            service.get_category(missing).await.unwrap_err(),
            CoreError::NotFound(format!("category {missing}"))
        );
    }

    #[tokio::test]
    async fn update_missing_category_is_not_found_and_never_writes() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let service = service(repository, MockEventPublisher::new());

        let result = service
            .update_category(UpdateCategoryInput {
                category_id: Uuid::new_v4(),
                name: Some("Renamed".to_string()),
                description: None,
                restaurant_id: None,
                country_code: None,
            })
            .await;

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_assembles_pagination_metadata_from_the_total_count() {
        // 25 matching rows, page 2 of size 10: the window holds rows 11-20.
        let window: Vec<Category> = (11..=20).map(|i| category(&format!("cat-{i}"))).collect();

        let mut repository = MockCategoryRepository::new();
        let returned = window.clone();
        repository
            .expect_list()
            .withf(|params| params.page == 2 && params.page_size == 10)
            .returning(move |_| {
                let items = returned.clone();
                Box::pin(async move {
                    Ok(Page {
                        items,
                        total_count: 25,
                    })
                })
            });

        let service = service(repository, MockEventPublisher::new());

        let paged = service
            .list_categories(ListParams {
                page: 2,
                page_size: 10,
                ..ListParams::default()
            })
            .await
            .unwrap();

        assert_eq!(paged.items.len(), 10);
        assert_eq!(paged.meta.total_count, 25);
        assert_eq!(paged.meta.current_page, 2);
        assert_eq!(paged.meta.total_pages, 3);
        assert_eq!(paged.meta.page_size, 10);
    }

    #[tokio::test]
    async fn publish_failure_is_reported_but_the_write_stands() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_insert()
            .times(1)
            .returning(|category| Box::pin(async move { Ok(category) }));

        let mut publisher = MockEventPublisher::new();
        publisher
            .expect_publish()
            .returning(|_, _, _| Box::pin(async { Err(CoreError::Publish("broker down".to_string())) }));

        let service = service(repository, publisher);

        let result = service
            .create_category(CreateCategoryInput {
                name: "Drinks".to_string(),
                description: String::new(),
                restaurant_id: Uuid::new_v4(),
                country_code: "ID".to_string(),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Publish(_))));
    }
}
