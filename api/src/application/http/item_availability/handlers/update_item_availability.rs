use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::item_availability::handlers::ItemAvailabilityData;
use crate::application::http::item_availability::validators::UpdateItemAvailabilityValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::item_availability::{
    ports::ItemAvailabilityService, value_objects::UpdateItemAvailabilityInput,
};

#[utoipa::path(
    put,
    path = "/{availability_id}",
    tag = "item-availability",
    summary = "Update item availability",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
        ("availability_id" = Uuid, Path, description = "Availability window id"),
    ),
    request_body = UpdateItemAvailabilityValidator,
    responses(
        (status = 200, body = ItemAvailabilityData),
        (status = 404, description = "Availability window not found")
    )
)]
pub async fn update_item_availability(
    Path((_item_id, availability_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateItemAvailabilityValidator>,
) -> Result<Response<ItemAvailabilityData>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let availability = state
        .service
        .update_item_availability(UpdateItemAvailabilityInput {
            availability_id,
            start_date: payload.start_date,
            end_date: payload.end_date,
            is_available: payload.is_available,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ItemAvailabilityData::from(availability)))
}
