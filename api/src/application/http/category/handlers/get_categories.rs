use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::application::http::category::handlers::CategoryData;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::category::ports::CategoryService;
use sajian_core::domain::common::queries::ListParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetCategoriesQuery {
    pub restaurant_id: Option<Uuid>,
    pub country_code: Option<String>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl From<GetCategoriesQuery> for ListParams {
    fn from(query: GetCategoriesQuery) -> Self {
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
    tag = "category",
    summary = "List categories",
    description = "List categories with filtering, search, sorting, and pagination",
    params(GetCategoriesQuery),
    responses(
        (status = 200, body = Vec<CategoryData>)
    )
)]
pub async fn get_categories(
    Query(query): Query<GetCategoriesQuery>,
    State(state): State<AppState>,
) -> Result<Response<CategoryData>, ApiError> {
    let paged = state
        .service
        .list_categories(ListParams::from(query))
        .await
        .map_err(ApiError::from)?;

    let categories = paged.items.into_iter().map(CategoryData::from).collect();

    Ok(Response::Page(categories, paged.meta))
}
