use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::application::http::promotion::handlers::PromotionData;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::common::queries::ListParams;
use sajian_core::domain::promotion::ports::PromotionService;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetPromotionsQuery {
    pub restaurant_id: Option<Uuid>,
    pub country_code: Option<String>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl From<GetPromotionsQuery> for ListParams {
    fn from(query: GetPromotionsQuery) -> Self {
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
    tag = "promotion",
    summary = "List promotions",
    description = "List promotions with filtering, search, sorting, and pagination",
    params(GetPromotionsQuery),
    responses(
        (status = 200, body = Vec<PromotionData>)
    )
)]
pub async fn get_promotions(
    Query(query): Query<GetPromotionsQuery>,
    State(state): State<AppState>,
) -> Result<Response<PromotionData>, ApiError> {
    let paged = state
        .service
        .list_promotions(ListParams::from(query))
        .await
        .map_err(ApiError::from)?;

    let promotions = paged.items.into_iter().map(PromotionData::from).collect();

    Ok(Response::Page(promotions, paged.meta))
}
