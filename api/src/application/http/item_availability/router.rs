use super::handlers::{
    create_item_availability::{__path_create_item_availability, create_item_availability},
    delete_item_availability::{__path_delete_item_availability, delete_item_availability},
    get_item_availability::{__path_get_item_availability, get_item_availability},
    update_item_availability::{__path_update_item_availability, update_item_availability},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_item_availability,
    create_item_availability,
    update_item_availability,
    delete_item_availability
))]
pub struct ItemAvailabilityApiDoc;

pub fn item_availability_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/menu-items/{{item_id}}/availability",
                state.args.server.root_path
            ),
            post(create_item_availability).get(get_item_availability),
        )
        .route(
            &format!(
                "{}/menu-items/{{item_id}}/availability/{{availability_id}}",
                state.args.server.root_path
            ),
            put(update_item_availability).delete(delete_item_availability),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
