use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::category::handlers::CategoryData;
use crate::application::http::category::validators::UpdateCategoryValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::category::{ports::CategoryService, value_objects::UpdateCategoryInput};

#[utoipa::path(
    put,
    path = "/{category_id}",
    tag = "category",
    summary = "Update category",
    params(
        ("category_id" = Uuid, Path, description = "Category id"),
    ),
    request_body = UpdateCategoryValidator,
    responses(
        (status = 200, body = CategoryData),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    Path(category_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateCategoryValidator>,
) -> Result<Response<CategoryData>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let category = state
        .service
        .update_category(UpdateCategoryInput {
            category_id,
            name: payload.name,
            description: payload.description,
            restaurant_id: payload.restaurant_id,
            country_code: payload.country_code,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CategoryData::from(category)))
}
