use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::application::http::category::handlers::CategoryData;
use crate::application::http::category::validators::CreateCategoryValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::category::{ports::CategoryService, value_objects::CreateCategoryInput};

#[utoipa::path(
    post,
    path = "",
    tag = "category",
    summary = "Create category",
    request_body = CreateCategoryValidator,
    responses(
        (status = 201, body = CategoryData, description = "Category created"),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryValidator>,
) -> Result<Response<CategoryData>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let category = state
        .service
        .create_category(CreateCategoryInput {
            name: payload.name,
            description: payload.description,
            restaurant_id: payload.restaurant_id,
            country_code: payload.country_code,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CategoryData::from(category)))
}
