use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::modifier::ports::ModifierService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteModifierResponse {
    pub modifier_id: Uuid,
}

#[utoipa::path(
    delete,
    path = "/{modifier_id}",
    tag = "modifier",
    summary = "Delete modifier",
    params(
        ("modifier_id" = Uuid, Path, description = "Modifier id"),
    ),
    responses(
        (status = 200, body = DeleteModifierResponse)
    )
)]
pub async fn delete_modifier(
    Path(modifier_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteModifierResponse>, ApiError> {
    state
        .service
        .delete_modifier(modifier_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteModifierResponse { modifier_id }))
}
