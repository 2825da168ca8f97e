use super::handlers::{
    create_promotion::{__path_create_promotion, create_promotion},
    delete_promotion::{__path_delete_promotion, delete_promotion},
    get_promotion::{__path_get_promotion, get_promotion},
    get_promotions::{__path_get_promotions, get_promotions},
    update_promotion::{__path_update_promotion, update_promotion},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_promotions,
    get_promotion,
    create_promotion,
    update_promotion,
    delete_promotion
))]
pub struct PromotionApiDoc;

pub fn promotion_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/promotions", state.args.server.root_path),
            post(create_promotion).get(get_promotions),
        )
        .route(
            &format!(
                "{}/promotions/{{promotion_id}}",
                state.args.server.root_path
            ),
            get(get_promotion)
                .put(update_promotion)
                .delete(delete_promotion),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
