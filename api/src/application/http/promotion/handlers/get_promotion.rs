use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::promotion::handlers::PromotionData;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::promotion::ports::PromotionService;

#[utoipa::path(
    get,
    path = "/{promotion_id}",
    tag = "promotion",
    summary = "Get promotion",
    params(
        ("promotion_id" = Uuid, Path, description = "Promotion id"),
    ),
    responses(
        (status = 200, body = PromotionData),
        (status = 404, description = "Promotion not found")
    )
)]
pub async fn get_promotion(
    Path(promotion_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<PromotionData>, ApiError> {
    let promotion = state
        .service
        .get_promotion(promotion_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PromotionData::from(promotion)))
}
