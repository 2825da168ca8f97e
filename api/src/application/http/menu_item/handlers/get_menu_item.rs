use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::menu_item::handlers::MenuItemData;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::menu_item::ports::MenuItemService;

#[utoipa::path(
    get,
    path = "/{item_id}",
    tag = "menu-item",
    summary = "Get menu item",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
    ),
    responses(
        (status = 200, body = MenuItemData),
        (status = 404, description = "Menu item not found")
    )
)]
pub async fn get_menu_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<MenuItemData>, ApiError> {
    let item = state
        .service
        .get_menu_item(item_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MenuItemData::from(item)))
}
