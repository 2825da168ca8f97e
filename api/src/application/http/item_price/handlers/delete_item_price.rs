use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::item_price::ports::ItemPriceService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteItemPriceResponse {
    pub price_id: Uuid,
}

#[utoipa::path(
    delete,
    path = "/{price_id}",
    tag = "item-price",
    summary = "Delete item price",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
        ("price_id" = Uuid, Path, description = "Price id"),
    ),
    responses(
        (status = 200, body = DeleteItemPriceResponse)
    )
)]
pub async fn delete_item_price(
    Path((_item_id, price_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<DeleteItemPriceResponse>, ApiError> {
    state
        .service
        .delete_item_price(price_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteItemPriceResponse { price_id }))
}
