use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;
use crate::domain::item_price::value_objects::CreateItemPriceInput;

/// A dated price window for a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemPrice {
    pub id: Uuid,
    pub item_id: Uuid,
    pub price: f64,
    pub cost_price: f64,
    pub currency: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub restaurant_id: Uuid,
    pub country_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemPrice {
    pub fn new(input: CreateItemPriceInput) -> Self {
        let now = Utc::now();
        let currency = if input.currency.is_empty() {
            "USD".to_string()
        } else {
            input.currency
        };

        Self {
            id: generate_uuid_v7(),
            item_id: input.item_id,
            price: input.price,
            cost_price: input.cost_price,
            currency,
            start_date: input.start_date,
            end_date: input.end_date,
            restaurant_id: input.restaurant_id,
            country_code: input.country_code,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(
        &mut self,
        price: Option<f64>,
        cost_price: Option<f64>,
        currency: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) {
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(cost_price) = cost_price {
            self.cost_price = cost_price;
        }
        if let Some(currency) = currency {
            self.currency = currency;
        }
        if let Some(start_date) = start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = end_date {
            self.end_date = Some(end_date);
        }
        self.updated_at = Utc::now();
    }
}
