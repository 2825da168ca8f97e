use super::handlers::{
    create_modifier::{__path_create_modifier, create_modifier},
    delete_modifier::{__path_delete_modifier, delete_modifier},
    get_modifier::{__path_get_modifier, get_modifier},
    get_modifiers::{__path_get_modifiers, get_modifiers},
    update_modifier::{__path_update_modifier, update_modifier},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_modifiers,
    get_modifier,
    create_modifier,
    update_modifier,
    delete_modifier
))]
pub struct ModifierApiDoc;

pub fn modifier_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/modifiers", state.args.server.root_path),
            post(create_modifier).get(get_modifiers),
        )
        .route(
            &format!("{}/modifiers/{{modifier_id}}", state.args.server.root_path),
            get(get_modifier)
                .put(update_modifier)
                .delete(delete_modifier),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
