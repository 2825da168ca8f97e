use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;
use crate::domain::promotion::value_objects::CreatePromotionInput;

/// A time-bounded discount, either percentage- or amount-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Promotion {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub discount_percentage: f64,
    pub discount_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub restaurant_id: Uuid,
    pub country_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Promotion {
    pub fn new(input: CreatePromotionInput) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            name: input.name,
            description: input.description,
            discount_percentage: input.discount_percentage,
            discount_amount: input.discount_amount,
            start_date: input.start_date,
            end_date: input.end_date,
            restaurant_id: input.restaurant_id,
            country_code: input.country_code,
            created_at: now,
            updated_at: now,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        discount_percentage: Option<f64>,
        discount_amount: Option<f64>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        restaurant_id: Option<Uuid>,
        country_code: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(discount_percentage) = discount_percentage {
            self.discount_percentage = discount_percentage;
        }
        if let Some(discount_amount) = discount_amount {
            self.discount_amount = discount_amount;
        }
        if let Some(start_date) = start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = end_date {
            self.end_date = Some(end_date);
        }
        if let Some(restaurant_id) = restaurant_id {
            self.restaurant_id = restaurant_id;
        }
        if let Some(country_code) = country_code {
            self.country_code = country_code;
        }
        self.updated_at = Utc::now();
    }
}
