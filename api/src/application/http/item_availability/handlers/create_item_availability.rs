use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::item_availability::handlers::ItemAvailabilityData;
use crate::application::http::item_availability::validators::CreateItemAvailabilityValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::item_availability::{
    ports::ItemAvailabilityService, value_objects::CreateItemAvailabilityInput,
};

#[utoipa::path(
    post,
    path = "",
    tag = "item-availability",
    summary = "Create item availability",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
    ),
    request_body = CreateItemAvailabilityValidator,
    responses(
        (status = 201, body = ItemAvailabilityData, description = "Availability window created"),
        (status = 404, description = "Menu item not found")
    )
)]
pub async fn create_item_availability(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<CreateItemAvailabilityValidator>,
) -> Result<Response<ItemAvailabilityData>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let availability = state
        .service
        .create_item_availability(CreateItemAvailabilityInput {
            item_id,
            start_date: payload.start_date,
            end_date: payload.end_date,
            is_available: payload.is_available,
            restaurant_id: payload.restaurant_id,
            country_code: payload.country_code,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ItemAvailabilityData::from(availability)))
}
