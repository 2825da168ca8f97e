use chrono::{TimeZone, Utc};

use crate::domain::item_price::entities::ItemPrice;
use crate::entity::item_prices::Model as ItemPriceModel;

impl From<ItemPriceModel> for ItemPrice {
    fn from(model: ItemPriceModel) -> Self {
        let created_at = Utc.from_utc_datetime(&model.created_at);
        let updated_at = Utc.from_utc_datetime(&model.updated_at);
        ItemPrice {
            id: model.id,
            item_id: model.item_id,
            price: model.price,
            cost_price: model.cost_price,
            currency: model.currency,
            start_date: model.start_date,
            end_date: model.end_date,
            restaurant_id: model.restaurant_id,
            country_code: model.country_code,
            created_at,
            updated_at,
        }
    }
}

impl From<&ItemPriceModel> for ItemPrice {
    fn from(model: &ItemPriceModel) -> Self {
        ItemPrice::from(model.clone())
    }
}
