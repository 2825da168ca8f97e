use uuid::Uuid;

pub struct CreateCategoryInput {
    pub name: String,
    pub description: String,
    pub restaurant_id: Uuid,
    pub country_code: String,
}

pub struct UpdateCategoryInput {
    pub category_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub restaurant_id: Option<Uuid>,
    pub country_code: Option<String>,
}
