use crate::domain::common::{SajianConfig, services::Service};
use crate::infrastructure::{
    category::repositories::category_repository::PostgresCategoryRepository,
    db::postgres::{Postgres, PostgresConfig},
    item_availability::repositories::item_availability_repository::PostgresItemAvailabilityRepository,
    item_price::repositories::item_price_repository::PostgresItemPriceRepository,
    menu_item::repositories::menu_item_repository::PostgresMenuItemRepository,
    modifier::repositories::modifier_repository::PostgresModifierRepository,
    mq::producer::KafkaEventPublisher,
    promotion::repositories::promotion_repository::PostgresPromotionRepository,
};

pub type SajianService = Service<
    PostgresCategoryRepository,
    PostgresMenuItemRepository,
    PostgresModifierRepository,
    PostgresItemPriceRepository,
    PostgresItemAvailabilityRepository,
    PostgresPromotionRepository,
    KafkaEventPublisher,
>;

pub async fn create_service(config: SajianConfig) -> Result<SajianService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let db = postgres.get_db();

    let event_publisher = KafkaEventPublisher::new(&config.messaging)?;

    Ok(Service::new(
        PostgresCategoryRepository::new(db.clone()),
        PostgresMenuItemRepository::new(db.clone()),
        PostgresModifierRepository::new(db.clone()),
        PostgresItemPriceRepository::new(db.clone()),
        PostgresItemAvailabilityRepository::new(db.clone()),
        PostgresPromotionRepository::new(db),
        event_publisher,
    ))
}
