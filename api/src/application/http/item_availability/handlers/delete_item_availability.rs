use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::item_availability::ports::ItemAvailabilityService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteItemAvailabilityResponse {
    pub availability_id: Uuid,
}

#[utoipa::path(
    delete,
    path = "/{availability_id}",
    tag = "item-availability",
    summary = "Delete item availability",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
        ("availability_id" = Uuid, Path, description = "Availability window id"),
    ),
    responses(
        (status = 200, body = DeleteItemAvailabilityResponse)
    )
)]
pub async fn delete_item_availability(
    Path((_item_id, availability_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Result<Response<DeleteItemAvailabilityResponse>, ApiError> {
    state
        .service
        .delete_item_availability(availability_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteItemAvailabilityResponse {
        availability_id,
    }))
}
