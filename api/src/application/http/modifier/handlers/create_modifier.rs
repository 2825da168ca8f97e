use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::application::http::modifier::handlers::ModifierData;
use crate::application::http::modifier::validators::CreateModifierValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::modifier::{ports::ModifierService, value_objects::CreateModifierInput};

#[utoipa::path(
    post,
    path = "",
    tag = "modifier",
    summary = "Create modifier",
    request_body = CreateModifierValidator,
    responses(
        (status = 201, body = ModifierData, description = "Modifier created"),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_modifier(
    State(state): State<AppState>,
    Json(payload): Json<CreateModifierValidator>,
) -> Result<Response<ModifierData>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let modifier = state
        .service
        .create_modifier(CreateModifierInput {
            name: payload.name,
            description: payload.description,
            restaurant_id: payload.restaurant_id,
            country_code: payload.country_code,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ModifierData::from(modifier)))
}
