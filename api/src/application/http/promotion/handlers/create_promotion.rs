use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::application::http::promotion::handlers::PromotionData;
use crate::application::http::promotion::validators::CreatePromotionValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::promotion::{
    ports::PromotionService, value_objects::CreatePromotionInput,
};

#[utoipa::path(
    post,
    path = "",
    tag = "promotion",
    summary = "Create promotion",
    request_body = CreatePromotionValidator,
    responses(
        (status = 201, body = PromotionData, description = "Promotion created"),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_promotion(
    State(state): State<AppState>,
    Json(payload): Json<CreatePromotionValidator>,
) -> Result<Response<PromotionData>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let promotion = state
        .service
        .create_promotion(CreatePromotionInput {
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

    Ok(Response::Created(PromotionData::from(promotion)))
}
