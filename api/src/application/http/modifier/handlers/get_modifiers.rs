use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::application::http::modifier::handlers::ModifierData;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use sajian_core::domain::common::queries::ListParams;
use sajian_core::domain::modifier::ports::ModifierService;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetModifiersQuery {
    pub restaurant_id: Option<Uuid>,
    pub country_code: Option<String>,
    pub search: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl From<GetModifiersQuery> for ListParams {
    fn from(query: GetModifiersQuery) -> Self {
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
    tag = "modifier",
    summary = "List modifiers",
    description = "List modifiers with filtering, search, sorting, and pagination",
    params(GetModifiersQuery),
    responses(
        (status = 200, body = Vec<ModifierData>)
    )
)]
pub async fn get_modifiers(
    Query(query): Query<GetModifiersQuery>,
    State(state): State<AppState>,
) -> Result<Response<ModifierData>, ApiError> {
    let paged = state
        .service
        .list_modifiers(ListParams::from(query))
        .await
        .map_err(ApiError::from)?;

    let modifiers = paged.items.into_iter().map(ModifierData::from).collect();

    Ok(Response::Page(modifiers, paged.meta))
}
