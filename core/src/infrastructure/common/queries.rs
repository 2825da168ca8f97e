//! Generic execution of the list query plan against Sea-ORM entities.
//!
//! One engine serves every catalog entity: a [`QueryableEntity`] descriptor
//! names the columns eligible for filtering, search, and sorting, and
//! [`fetch_page`] runs the composed plan as a count plus a windowed fetch.

use sea_orm::sea_query::{Condition, Expr, Func};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::common::queries::{FilterValue, ListParams, Page, ScopeField, SortDirection};

/// Column descriptor hooking an entity into the shared list query engine.
pub trait QueryableEntity: EntityTrait {
    fn restaurant_column() -> Self::Column;

    fn country_column() -> Self::Column;

    /// `(name, description)` when the entity carries searchable text.
    fn search_columns() -> Option<(Self::Column, Self::Column)>;

    /// Whitelisted sort columns. Fields outside the whitelist fall back to
    /// [`QueryableEntity::created_at_column`].
    fn sort_column(field: &str) -> Option<Self::Column>;

    fn created_at_column() -> Self::Column;
}

/// Applies the filter and search predicates. Ordering and pagination are left
/// to the caller so the same selection can back both the count and the page
/// fetch.
pub fn scope<E: QueryableEntity>(mut query: Select<E>, params: &ListParams) -> Select<E> {
    for condition in params.filters().conditions {
        let column = match condition.field {
            ScopeField::Restaurant => E::restaurant_column(),
            ScopeField::Country => E::country_column(),
        };
        query = match condition.value {
            FilterValue::Uuid(id) => query.filter(column.eq(id)),
            FilterValue::Text(text) => query.filter(column.eq(text)),
        };
    }

    if let Some(pattern) = params.search_pattern()
        && let Some((name, description)) = E::search_columns()
    {
        query = query.filter(
            Condition::any()
                .add(Expr::expr(Func::lower(Expr::col(name))).like(pattern.as_str()))
                .add(Expr::expr(Func::lower(Expr::col(description))).like(pattern.as_str())),
        );
    }

    query
}

/// Applies the resolved sort and, when requested, the offset/limit window.
pub fn order_and_page<E: QueryableEntity>(mut query: Select<E>, params: &ListParams) -> Select<E> {
    let sort = params.sort();
    let column = E::sort_column(&sort.field).unwrap_or_else(E::created_at_column);
    let order = match sort.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };
    query = query.order_by(column, order);

    if let Some(page) = params.page_spec() {
        query = query.offset(page.offset).limit(page.limit);
    }

    query
}

/// Runs the plan: counts every row matching filter+search, then fetches the
/// requested window in order. A storage failure on either step surfaces as
/// [`CoreError::Storage`] with no partial result.
pub async fn fetch_page<E>(
    db: &DatabaseConnection,
    base: Select<E>,
    params: &ListParams,
) -> Result<Page<E::Model>, CoreError>
where
    E: QueryableEntity,
    E::Model: FromQueryResult + Send + Sync,
{
    let scoped = scope(base, params);

    let total_count = scoped.clone().count(db).await.map_err(|e| {
        error!("failed to count rows: {}", e);
        CoreError::Storage(e.to_string())
    })?;

    let items = order_and_page(scoped, params).all(db).await.map_err(|e| {
        error!("failed to fetch rows: {}", e);
        CoreError::Storage(e.to_string())
    })?;

    Ok(Page { items, total_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::categories;
    use sea_orm::{DbBackend, QueryTrait};
    use uuid::Uuid;

    fn sql(params: &ListParams) -> String {
        let query = scope(categories::Entity::find(), params);
        order_and_page(query, params)
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn empty_params_select_everything_in_default_order() {
        let query = sql(&ListParams::default());

        assert!(!query.contains("WHERE"));
        assert!(!query.contains("LIMIT"));
        assert!(!query.contains("OFFSET"));
        assert!(query.contains(r#"ORDER BY "categories"."created_at" ASC"#));
    }

    #[test]
    fn scope_fields_become_equality_predicates() {
        let restaurant_id = Uuid::new_v4();
        let query = sql(&ListParams {
            restaurant_id: Some(restaurant_id),
            country_code: Some("ID".to_string()),
            ..ListParams::default()
        });

        assert!(query.contains(r#""restaurant_id" ="#));
        assert!(query.contains(&restaurant_id.to_string()));
        assert!(query.contains(r#""country_code" = 'ID'"#));
    }

    #[test]
    fn search_folds_case_on_both_columns() {
        let query = sql(&ListParams {
            search: Some("BURGER".to_string()),
            ..ListParams::default()
        });

        assert!(query.contains(r#"LOWER("name") LIKE '%burger%'"#));
        assert!(query.contains(r#"LOWER("description") LIKE '%burger%'"#));
        assert!(query.contains(" OR "));
    }

    #[test]
    fn empty_search_adds_no_predicate() {
        let query = sql(&ListParams {
            search: Some(String::new()),
            ..ListParams::default()
        });

        assert!(!query.contains("LIKE"));
    }

    #[test]
    fn pagination_maps_to_offset_and_limit() {
        let query = sql(&ListParams {
            page: 2,
            page_size: 10,
            ..ListParams::default()
        });

        assert!(query.contains("LIMIT 10"));
        assert!(query.contains("OFFSET 10"));
    }

    #[test]
    fn unpaginated_query_has_no_window() {
        let query = sql(&ListParams {
            page: 0,
            page_size: 25,
            ..ListParams::default()
        });

        assert!(!query.contains("LIMIT"));
        assert!(!query.contains("OFFSET"));
    }

    #[test]
    fn unknown_sort_field_falls_back_to_created_at() {
        let query = sql(&ListParams {
            sort_by: Some("password; DROP TABLE categories".to_string()),
            sort_order: Some("desc".to_string()),
            ..ListParams::default()
        });

        assert!(query.contains(r#"ORDER BY "categories"."created_at" DESC"#));
        assert!(!query.contains("DROP TABLE"));
    }

    #[test]
    fn whitelisted_sort_field_is_used() {
        let query = sql(&ListParams {
            sort_by: Some("name".to_string()),
            sort_order: Some("desc".to_string()),
            ..ListParams::default()
        });

        assert!(query.contains(r#"ORDER BY "categories"."name" DESC"#));
    }

    #[test]
    fn plan_construction_is_deterministic() {
        let params = ListParams {
            restaurant_id: Some(Uuid::new_v4()),
            search: Some("Sate".to_string()),
            page: 3,
            page_size: 5,
            sort_by: Some("name".to_string()),
            sort_order: Some("desc".to_string()),
            ..ListParams::default()
        };

        assert_eq!(sql(&params), sql(&params));
    }
}
