use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::application::http::menu_item::handlers::MenuItemData;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::common::queries::ListParams;
use sajian_core::domain::menu_item::ports::MenuItemService;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetMenuItemsQuery {
    pub restaurant_id: Option<Uuid>,
    pub country_code: Option<String>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl From<GetMenuItemsQuery> for ListParams {
    fn from(query: GetMenuItemsQuery) -> Self {
        ListParams {
            restaurant_id: query.restaurant_id,
            country_code: query.country_code,
            search: query.search,
            page: query.page.unwrap_or(0),
            page_size: query.page_size.unwrap_or(0),
            sort_by: query.sort_by,
            sort_order: query.sort_order,
        }
    }
}

#[utoipa::path(
    get,
    path = "",
    tag = "menu-item",
    summary = "List menu items",
    description = "List menu items with filtering, search, sorting, and pagination",
    params(GetMenuItemsQuery),
    responses(
        (status = 200, body = Vec<MenuItemData>)
    )
)]
pub async fn get_menu_items(
    Query(query): Query<GetMenuItemsQuery>,
    State(state): State<AppState>,
) -> Result<Response<MenuItemData>, ApiError> {
    let paged = state
        .service
        .list_menu_items(ListParams::from(query))
        .await
        .map_err(ApiError::from)?;

    let items = paged.items.into_iter().map(MenuItemData::from).collect();

    Ok(Response::Page(items, paged.meta))
}
