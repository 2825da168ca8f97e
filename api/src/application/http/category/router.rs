use super::handlers::{
    create_category::{__path_create_category, create_category},
    delete_category::{__path_delete_category, delete_category},
    get_categories::{__path_get_categories, get_categories},
    get_category::{__path_get_category, get_category},
    update_category::{__path_update_category, update_category},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_categories,
    get_category,
    create_category,
    update_category,
    delete_category
))]
pub struct CategoryApiDoc;

pub fn category_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/categories", state.args.server.root_path),
            post(create_category).get(get_categories),
        )
        .route(
            &format!("{}/categories/{{category_id}}", state.args.server.root_path),
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
