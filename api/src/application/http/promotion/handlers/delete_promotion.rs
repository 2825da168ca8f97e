use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::promotion::ports::PromotionService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeletePromotionResponse {
    pub promotion_id: Uuid,
}

#[utoipa::path(
    delete,
    path = "/{promotion_id}",
    tag = "promotion",
    summary = "Delete promotion",
    params(
        ("promotion_id" = Uuid, Path, description = "Promotion id"),
    ),
    responses(
        (status = 200, body = DeletePromotionResponse)
    )
)]
pub async fn delete_promotion(
    Path(promotion_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeletePromotionResponse>, ApiError> {
    state
        .service
        .delete_promotion(promotion_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeletePromotionResponse { promotion_id }))
}
