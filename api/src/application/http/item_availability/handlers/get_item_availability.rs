use axum::extract::{Path, Query, State};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::application::http::item_availability::handlers::ItemAvailabilityData;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::common::queries::ListParams;
use sajian_core::domain::item_availability::ports::ItemAvailabilityService;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetItemAvailabilityQuery {
    pub restaurant_id: Option<Uuid>,
    pub country_code: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl From<GetItemAvailabilityQuery> for ListParams {
    fn from(query: GetItemAvailabilityQuery) -> Self {
        ListParams {
            restaurant_id: query.restaurant_id,
            country_code: query.country_code,
            search: None,
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
    tag = "item-availability",
    summary = "List item availability",
    description = "List the availability windows of a menu item",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
        GetItemAvailabilityQuery
    ),
    responses(
        (status = 200, body = Vec<ItemAvailabilityData>)
    )
)]
pub async fn get_item_availability(
    Path(item_id): Path<Uuid>,
    Query(query): Query<GetItemAvailabilityQuery>,
    State(state): State<AppState>,
) -> Result<Response<ItemAvailabilityData>, ApiError> {
    let paged = state
        .service
        .list_item_availability(item_id, ListParams::from(query))
        .await
        .map_err(ApiError::from)?;

    let windows = paged
        .items
        .into_iter()
        .map(ItemAvailabilityData::from)
        .collect();

    Ok(Response::Page(windows, paged.meta))
}
