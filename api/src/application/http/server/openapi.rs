use crate::application::http::{
    category::router::CategoryApiDoc, item_availability::router::ItemAvailabilityApiDoc,
    item_price::router::ItemPriceApiDoc, menu_item::router::MenuItemApiDoc,
    modifier::router::ModifierApiDoc, promotion::router::PromotionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sajian Catalog API"
    ),
    nest(
        (path = "/categories", api = CategoryApiDoc),
        (path = "/menu-items", api = MenuItemApiDoc),
        (path = "/menu-items/{item_id}/prices", api = ItemPriceApiDoc),
        (path = "/menu-items/{item_id}/availability", api = ItemAvailabilityApiDoc),
        (path = "/modifiers", api = ModifierApiDoc),
        (path = "/promotions", api = PromotionApiDoc),
    )
)]
pub struct ApiDoc;
