use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::item_price::handlers::ItemPriceData;
use crate::application::http::item_price::validators::UpdateItemPriceValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::item_price::{
    ports::ItemPriceService, value_objects::UpdateItemPriceInput,
};

#[utoipa::path(
    put,
    path = "/{price_id}",
    tag = "item-price",
    summary = "Update item price",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
        ("price_id" = Uuid, Path, description = "Price id"),
    ),
    request_body = UpdateItemPriceValidator,
    responses(
        (status = 200, body = ItemPriceData),
        (status = 404, description = "Price not found")
    )
)]
pub async fn update_item_price(
    Path((_item_id, price_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateItemPriceValidator>,
) -> Result<Response<ItemPriceData>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let price = state
        .service
        .update_item_price(UpdateItemPriceInput {
            price_id,
            price: payload.price,
            cost_price: payload.cost_price,
            currency: payload.currency,
            start_date: payload.start_date,
            end_date: payload.end_date,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ItemPriceData::from(price)))
}
