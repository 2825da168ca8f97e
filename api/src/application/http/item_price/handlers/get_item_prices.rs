use axum::extract::{Path, Query, State};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::application::http::item_price::handlers::ItemPriceData;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::common::queries::ListParams;
use sajian_core::domain::item_price::ports::ItemPriceService;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetItemPricesQuery {
    pub restaurant_id: Option<Uuid>,
    pub country_code: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl From<GetItemPricesQuery> for ListParams {
    fn from(query: GetItemPricesQuery) -> Self {
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
    tag = "item-price",
    summary = "List item prices",
    description = "List the price windows of a menu item",
    params(
        ("item_id" = Uuid, Path, description = "Menu item id"),
        GetItemPricesQuery
    ),
    responses(
        (status = 200, body = Vec<ItemPriceData>)
    )
)]
pub async fn get_item_prices(
    Path(item_id): Path<Uuid>,
    Query(query): Query<GetItemPricesQuery>,
    State(state): State<AppState>,
) -> Result<Response<ItemPriceData>, ApiError> {
    let paged = state
        .service
        .list_item_prices(item_id, ListParams::from(query))
        .await
        .map_err(ApiError::from)?;

    let prices = paged.items.into_iter().map(ItemPriceData::from).collect();

    Ok(Response::Page(prices, paged.meta))
}
