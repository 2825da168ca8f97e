pub mod create_item_price;
pub mod delete_item_price;
pub mod get_item_prices;
pub mod update_item_price;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use sajian_core::domain::item_price::entities::ItemPrice;

/// Wire shape shared by the item price handlers.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ItemPriceData {
    pub price_id: Uuid,
    pub item_id: Uuid,
    pub price: f64,
    pub cost_price: f64,
    pub currency: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub restaurant_id: Uuid,
    pub country_code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<ItemPrice> for ItemPriceData {
    fn from(price: ItemPrice) -> Self {
        Self {
            price_id: price.id,
            item_id: price.item_id,
            price: price.price,
            cost_price: price.cost_price,
            currency: price.currency,
            start_date: price.start_date,
            end_date: price.end_date,
            restaurant_id: price.restaurant_id,
            country_code: price.country_code,
            created_at: price.created_at,
            updated_at: price.updated_at,
        }
    }
}
