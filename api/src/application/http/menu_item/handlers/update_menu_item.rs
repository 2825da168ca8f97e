use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use crate::application::http::menu_item::handlers::MenuItemData;
use crate::application::http::menu_item::validators::UpdateMenuItemValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::menu_item::{ports::MenuItemService, value_objects::UpdateMenuItemInput};

#[utoipa::path(
    put,
    path = "/{item_id}",
    tag = "menu-item",
    summary = "Update menu item",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
    ),
    request_body = UpdateMenuItemValidator,
    responses(
        (status = 200, body = MenuItemData),
        (status = 404, description = "Menu item not found")
    )
)]
pub async fn update_menu_item(
    Path(item_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateMenuItemValidator>,
) -> Result<Response<MenuItemData>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let item = state
        .service
        .update_menu_item(UpdateMenuItemInput {
            item_id,
            name: payload.name,
            description: payload.description,
            available_status: payload.available_status,
            preparation_time: payload.preparation_time,
            is_customizable: payload.is_customizable,
            category_id: payload.category_id,
            restaurant_id: payload.restaurant_id,
            country_code: payload.country_code,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(MenuItemData::from(item)))
}
