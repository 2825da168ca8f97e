use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::modifier::handlers::ModifierData;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::modifier::ports::ModifierService;

#[utoipa::path(
    get,
    path = "/{modifier_id}",
    tag = "modifier",
    summary = "Get modifier",
    params(
        ("modifier_id" = Uuid, Path, description = "Modifier id"),
    ),
    responses(
        (status = 200, body = ModifierData),
        (status = 404, description = "Modifier not found")
    )
)]
pub async fn get_modifier(
    Path(modifier_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<ModifierData>, ApiError> {
    let modifier = state
        .service
        .get_modifier(modifier_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ModifierData::from(modifier)))
}
