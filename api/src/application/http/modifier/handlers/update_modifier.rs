use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::modifier::handlers::ModifierData;
use crate::application::http::modifier::validators::UpdateModifierValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::modifier::{ports::ModifierService, value_objects::UpdateModifierInput};

#[utoipa::path(
    put,
    path = "/{modifier_id}",
    tag = "modifier",
    summary = "Update modifier",
    params(
        ("modifier_id" = Uuid, Path, description = "Modifier id"),
    ),
    request_body = UpdateModifierValidator,
    responses(
        (status = 200, body = ModifierData),
        (status = 404, description = "Modifier not found")
    )
)]
pub async fn update_modifier(
    Path(modifier_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateModifierValidator>,
) -> Result<Response<ModifierData>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let modifier = state
        .service
        .update_modifier(UpdateModifierInput {
            modifier_id,
            name: payload.name,
            description: payload.description,
            restaurant_id: payload.restaurant_id,
            country_code: payload.country_code,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ModifierData::from(modifier)))
}
