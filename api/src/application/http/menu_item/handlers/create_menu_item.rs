use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::application::http::menu_item::handlers::MenuItemData;
use crate::application::http::menu_item::validators::CreateMenuItemValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::menu_item::{ports::MenuItemService, value_objects::CreateMenuItemInput};

#[utoipa::path(
    post,
    path = "",
    tag = "menu-item",
    summary = "Create menu item",
    request_body = CreateMenuItemValidator,
    responses(
        (status = 201, body = MenuItemData, description = "Menu item created"),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuItemValidator>,
) -> Result<Response<MenuItemData>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let item = state
        .service
        .create_menu_item(CreateMenuItemInput {
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

    Ok(Response::Created(MenuItemData::from(item)))
}
