use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::menu_item::ports::MenuItemService;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteMenuItemResponse {
    pub item_id: Uuid,
}

#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "menu-item",
    summary = "Delete menu item",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
    ),
    responses(
        (status = 200, body = DeleteMenuItemResponse)
    )
)]
pub async fn delete_menu_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteMenuItemResponse>, ApiError> {
    state
        .service
        .delete_menu_item(item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteMenuItemResponse { item_id }))
}
