use uuid::Uuid;

pub struct CreateMenuItemInput {
    pub name: String,
    pub description: String,
    pub available_status: bool,
    pub preparation_time: i32,
    pub is_customizable: bool,
    pub category_id: Option<Uuid>,
    pub restaurant_id: Uuid,
    pub country_code: String,
}

pub struct UpdateMenuItemInput {
    pub item_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub available_status: Option<bool>,
    pub preparation_time: Option<i32>,
    pub is_customizable: Option<bool>,
    pub category_id: Option<Uuid>,
    pub restaurant_id: Option<Uuid>,
    pub country_code: Option<String>,
}
