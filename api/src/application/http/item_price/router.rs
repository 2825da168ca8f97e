use super::handlers::{
    create_item_price::{__path_create_item_price, create_item_price},
    delete_item_price::{__path_delete_item_price, delete_item_price},
    get_item_prices::{__path_get_item_prices, get_item_prices},
    update_item_price::{__path_update_item_price, update_item_price},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_item_prices,
    create_item_price,
    update_item_price,
    delete_item_price
))]
pub struct ItemPriceApiDoc;

pub fn item_price_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/menu-items/{{item_id}}/prices",
                state.args.server.root_path
            ),
            post(create_item_price).get(get_item_prices),
        )
        .route(
            &format!(
                "{}/menu-items/{{item_id}}/prices/{{price_id}}",
                state.args.server.root_path
            ),
            put(update_item_price).delete(delete_item_price),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
