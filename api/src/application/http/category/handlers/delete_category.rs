use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::category::ports::CategoryService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCategoryResponse {
    pub category_id: Uuid,
}

#[utoipa::path(
    delete,
    path = "/{category_id}",
    tag = "category",
    summary = "Delete category",
    params(
        ("category_id" = Uuid, Path, description = "Category id"),
    ),
    responses(
        (status = 200, body = DeleteCategoryResponse)
    )
)]
pub async fn delete_category(
    Path(category_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteCategoryResponse>, ApiError> {
    state
        .service
        .delete_category(category_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteCategoryResponse { category_id }))
}
