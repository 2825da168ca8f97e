//! Query composition for list endpoints.
//!
//! Every list query is described by [`ListParams`] and resolved into its
//! filter, search, sort, and pagination parts independently. Absent or
//! zero-value inputs mean "no constraint" and never produce a predicate.

use uuid::Uuid;

/// Sort field applied when the caller supplies none, or one outside the
/// entity's sortable set.
pub const DEFAULT_SORT_FIELD: &str = "created_at";

/// Raw list-query parameters as supplied by the caller.
///
/// `page` and `page_size` of zero (or below) mean "no pagination": the full
/// filtered result set is returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub restaurant_id: Option<Uuid>,
    pub country_code: Option<String>,
    pub search: Option<String>,
    pub page: i64,
    pub page_size: i64,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ListParams {
    /// One equality condition per scoping field actually supplied. A nil
    /// restaurant id or empty country code never becomes a predicate.
    pub fn filters(&self) -> FilterSpec {
        let mut conditions = Vec::new();

        if let Some(restaurant_id) = self.restaurant_id
            && !restaurant_id.is_nil()
        {
            conditions.push(FilterCondition {
                field: ScopeField::Restaurant,
                value: FilterValue::Uuid(restaurant_id),
            });
        }

        if let Some(country_code) = self.country_code.as_deref()
            && !country_code.is_empty()
        {
            conditions.push(FilterCondition {
                field: ScopeField::Country,
                value: FilterValue::Text(country_code.to_string()),
            });
        }

        FilterSpec { conditions }
    }

    /// Lower-cased, wildcard-wrapped pattern for the name/description search,
    /// or `None` when no term was supplied. The stored fields are folded the
    /// same way at query time, so matching is case-insensitive regardless of
    /// the store's collation.
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(|term| format!("%{}%", term.to_lowercase()))
    }

    pub fn sort(&self) -> SortSpec {
        SortSpec::resolve(self.sort_by.as_deref(), self.sort_order.as_deref())
    }

    pub fn page_spec(&self) -> Option<PageSpec> {
        PageSpec::resolve(self.page, self.page_size)
    }

    pub fn page_meta(&self, total_count: u64) -> PageMeta {
        PageMeta::new(total_count, self.page, self.page_size)
    }
}

/// Scoping fields eligible for equality filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeField {
    Restaurant,
    Country,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Uuid(Uuid),
    Text(String),
}

/// A single (field, equals, value) condition.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    pub field: ScopeField,
    pub value: FilterValue,
}

/// Conjunction of equality conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub conditions: Vec<FilterCondition>,
}

impl FilterSpec {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Resolved sort specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Empty field falls back to [`DEFAULT_SORT_FIELD`]; anything other than
    /// exactly `asc` or `desc` falls back to ascending.
    pub fn resolve(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let field = match sort_by {
            Some(field) if !field.is_empty() => field.to_string(),
            _ => DEFAULT_SORT_FIELD.to_string(),
        };

        let direction = match sort_order {
            Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };

        Self { field, direction }
    }
}

/// Offset/limit window derived from page/page_size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub offset: u64,
    pub limit: u64,
}

impl PageSpec {
    /// Pagination applies only when both page and page_size are positive;
    /// otherwise the full result set is returned.
    pub fn resolve(page: i64, page_size: i64) -> Option<Self> {
        if page > 0 && page_size > 0 {
            Some(Self {
                offset: ((page - 1) * page_size) as u64,
                limit: page_size as u64,
            })
        } else {
            None
        }
    }
}

/// Pagination metadata reported back to the caller.
///
/// `current_page` and `page_size` echo the caller's values as-is;
/// `total_pages` is `ceil(total_count / page_size)` when a page size was
/// supplied and zero otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub total_count: u64,
    pub current_page: i64,
    pub total_pages: i64,
    pub page_size: i64,
}

impl PageMeta {
    pub fn new(total_count: u64, page: i64, page_size: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total_count as i64 + page_size - 1) / page_size
        } else {
            0
        };

        Self {
            total_count,
            current_page: page,
            total_pages,
            page_size,
        }
    }
}

/// A repository page: the rows of the requested window plus the count of all
/// rows matching filter and search, ignoring pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

/// A service-level page: items plus assembled pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ListParams {
        ListParams::default()
    }

    #[test]
    fn absent_scope_fields_produce_no_conditions() {
        assert!(params().filters().is_empty());

        let nil_scope = ListParams {
            restaurant_id: Some(Uuid::nil()),
            country_code: Some(String::new()),
            ..params()
        };
        assert!(nil_scope.filters().is_empty());
    }

    #[test]
    fn supplied_scope_fields_produce_one_condition_each() {
        let restaurant_id = Uuid::new_v4();
        let full = ListParams {
            restaurant_id: Some(restaurant_id),
            country_code: Some("ID".to_string()),
            ..params()
        };

        let spec = full.filters();
        assert_eq!(spec.conditions.len(), 2);
        assert_eq!(spec.conditions[0].field, ScopeField::Restaurant);
        assert_eq!(spec.conditions[0].value, FilterValue::Uuid(restaurant_id));
        assert_eq!(spec.conditions[1].field, ScopeField::Country);
        assert_eq!(
            spec.conditions[1].value,
            FilterValue::Text("ID".to_string())
        );
    }

    #[test]
    fn empty_search_produces_no_pattern() {
        assert_eq!(params().search_pattern(), None);

        let empty = ListParams {
            search: Some(String::new()),
            ..params()
        };
        assert_eq!(empty.search_pattern(), None);
    }

    #[test]
    fn search_pattern_is_lowercased_and_wrapped() {
        let upper = ListParams {
            search: Some("BURGER".to_string()),
            ..params()
        };
        assert_eq!(upper.search_pattern(), Some("%burger%".to_string()));

        let mixed = ListParams {
            search: Some("Burger".to_string()),
            ..params()
        };
        assert_eq!(mixed.search_pattern(), Some("%burger%".to_string()));
    }

    #[test]
    fn sort_defaults_apply() {
        let sort = SortSpec::resolve(None, None);
        assert_eq!(sort.field, DEFAULT_SORT_FIELD);
        assert_eq!(sort.direction, SortDirection::Asc);

        let sort = SortSpec::resolve(Some(""), Some("invalid"));
        assert_eq!(sort.field, DEFAULT_SORT_FIELD);
        assert_eq!(sort.direction, SortDirection::Asc);

        // direction match is case-sensitive
        let sort = SortSpec::resolve(Some("name"), Some("DESC"));
        assert_eq!(sort.field, "name");
        assert_eq!(sort.direction, SortDirection::Asc);

        let sort = SortSpec::resolve(Some("name"), Some("desc"));
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn page_spec_requires_both_values_positive() {
        assert_eq!(PageSpec::resolve(0, 10), None);
        assert_eq!(PageSpec::resolve(2, 0), None);
        assert_eq!(PageSpec::resolve(-1, 10), None);
        assert_eq!(PageSpec::resolve(10, -1), None);

        let page = PageSpec::resolve(2, 10).unwrap();
        assert_eq!(page.offset, 10);
        assert_eq!(page.limit, 10);

        let first = PageSpec::resolve(1, 25).unwrap();
        assert_eq!(first.offset, 0);
        assert_eq!(first.limit, 25);
    }

    #[test]
    fn total_pages_is_ceiling_of_count_over_size() {
        assert_eq!(PageMeta::new(0, 1, 10).total_pages, 0);
        assert_eq!(PageMeta::new(1, 1, 10).total_pages, 1);
        assert_eq!(PageMeta::new(10, 1, 10).total_pages, 1);
        assert_eq!(PageMeta::new(11, 1, 10).total_pages, 2);
        assert_eq!(PageMeta::new(20, 2, 10).total_pages, 2);
        assert_eq!(PageMeta::new(25, 2, 10).total_pages, 3);
    }

    #[test]
    fn page_meta_echoes_caller_values_without_pagination() {
        let meta = PageMeta::new(7, 0, 0);
        assert_eq!(meta.total_count, 7);
        assert_eq!(meta.current_page, 0);
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.page_size, 0);
    }
}
