use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::promotion::handlers::PromotionData;
use crate::application::http::promotion::validators::UpdatePromotionValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::promotion::{
    ports::PromotionService, value_objects::UpdatePromotionInput,
};

#[utoipa::path(
    put,
    path = "/{promotion_id}",
    tag = "promotion",
    summary = "Update promotion",
    params(
        ("promotion_id" = Uuid, Path, description = "Promotion id"),
    ),
    request_body = UpdatePromotionValidator,
    responses(
        (status = 200, body = PromotionData),
        (status = 404, description = "Promotion not found")
    )
)]
pub async fn update_promotion(
    Path(promotion_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdatePromotionValidator>,
) -> Result<Response<PromotionData>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let promotion = state
        .service
        .update_promotion(UpdatePromotionInput {
            promotion_id,
            name: payload.name,
            description: payload.description,
            discount_percentage: payload.discount_percentage,
            discount_amount: payload.discount_amount,
            start_date: payload.start_date,
            end_date: payload.end_date,
            restaurant_id: payload.restaurant_id,
            country_code: payload.country_code,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PromotionData::from(promotion)))
}
