use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::item_price::handlers::ItemPriceData;
use crate::application::http::item_price::validators::CreateItemPriceValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::item_price::{
    ports::ItemPriceService, value_objects::CreateItemPriceInput,
};

#[utoipa::path(
    post,
    path = "",
    tag = "item-price",
    summary = "Create item price",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
    ),
    request_body = CreateItemPriceValidator,
    responses(
        (status = 201, body = ItemPriceData, description = "Price created"),
        (status = 404, description = "Menu item not found")
    )
)]
pub async fn create_item_price(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<CreateItemPriceValidator>,
) -> Result<Response<ItemPriceData>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let price = state
        .service
        .create_item_price(CreateItemPriceInput {
            item_id,
            price: payload.price,
            cost_price: payload.cost_price,
            currency: payload.currency,
            start_date: payload.start_date,
            end_date: payload.end_date,
            restaurant_id: payload.restaurant_id,
            country_code: payload.country_code,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ItemPriceData::from(price)))
}
