use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::category::handlers::CategoryData;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::category::ports::CategoryService;

#[utoipa::path(
    get,
    path = "/{category_id}",
    tag = "category",
    summary = "Get category",
    params(
        ("category_id" = Uuid, Path, description = "Category id"),
    ),
    responses(
        (status = 200, body = CategoryData),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    Path(category_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<CategoryData>, ApiError> {
    let category = state
        .service
        .get_category(category_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CategoryData::from(category)))
}
