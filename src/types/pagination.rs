//! Pagination types for the product listing.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGINATION_VALUE, SORT_DESC, ZERO_LIMIT_PAGE_SIZE,
};
use crate::domain::Product;

/// Raw listing query parameters.
///
/// Kept as strings so unparsable values fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Page number, starting at 1
    pub page: Option<String>,
    /// Items per page
    pub limit: Option<String>,
    /// `asc` (default) or `desc`
    pub sort: Option<String>,
}

/// Creation-time ordering of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `desc` sorts ascending.
    pub fn from_query(value: &str) -> Self {
        if value == SORT_DESC {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Normalized pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u64,
    pub limit: u64,
    pub sort: SortOrder,
}

impl PaginationParams {
    /// Page and limit are clamped to [`MAX_PAGINATION_VALUE`].
    pub fn new(page: u64, limit: u64, sort: SortOrder) -> Self {
        Self {
            page: page.min(MAX_PAGINATION_VALUE),
            limit: limit.min(MAX_PAGINATION_VALUE),
            sort,
        }
    }

    /// Calculate offset for database query, saturating at
    /// [`MAX_PAGINATION_VALUE`]
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(MAX_PAGINATION_VALUE)
    }

    /// Number of pages needed for `total` items
    pub fn total_pages(&self, total: u64) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        total.div_ceil(self.limit)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, SortOrder::Asc)
    }
}

impl From<ListQuery> for PaginationParams {
    fn from(query: ListQuery) -> Self {
        let page = match query.page.as_deref().map(str::parse::<u64>) {
            Some(Ok(page)) if page > 0 => page,
            _ => DEFAULT_PAGE_NUMBER,
        };
        // An explicit zero limit becomes 1, not the default page size
        let limit = match query.limit.as_deref().map(str::parse::<u64>) {
            Some(Ok(0)) => ZERO_LIMIT_PAGE_SIZE,
            Some(Ok(limit)) => limit,
            _ => DEFAULT_PAGE_SIZE,
        };
        let sort = query
            .sort
            .as_deref()
            .map(SortOrder::from_query)
            .unwrap_or_default();

        Self::new(page, limit, sort)
    }
}

/// One page of products
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Number of products on this page
    pub items_amount: usize,
    /// Pages available at the requested limit
    pub total_pages: u64,
}

impl ProductPage {
    pub fn new(products: Vec<Product>, params: &PaginationParams, total: u64) -> Self {
        Self {
            items_amount: products.len(),
            total_pages: params.total_pages(total),
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>, sort: Option<&str>) -> PaginationParams {
        ListQuery {
            page: page.map(String::from),
            limit: limit.map(String::from),
            sort: sort.map(String::from),
        }
        .into()
    }

    #[test]
    fn test_defaults_when_missing() {
        assert_eq!(query(None, None, None), PaginationParams::new(1, 10, SortOrder::Asc));
    }

    #[test]
    fn test_defaults_when_unparsable() {
        let params = query(Some("abc"), Some("ten"), Some("sideways"));
        assert_eq!(params, PaginationParams::new(1, 10, SortOrder::Asc));
    }

    #[test]
    fn test_negative_values_fall_back() {
        let params = query(Some("-2"), Some("-5"), None);
        assert_eq!(params, PaginationParams::new(1, 10, SortOrder::Asc));
    }

    #[test]
    fn test_zero_page_becomes_first() {
        assert_eq!(query(Some("0"), Some("5"), None).page, 1);
    }

    #[test]
    fn test_zero_limit_becomes_one() {
        assert_eq!(query(Some("3"), Some("0"), None).limit, 1);
    }

    #[test]
    fn test_desc_sort() {
        assert_eq!(query(None, None, Some("desc")).sort, SortOrder::Desc);
        assert_eq!(query(None, None, Some("asc")).sort, SortOrder::Asc);
        assert_eq!(query(None, None, Some("")).sort, SortOrder::Asc);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PaginationParams::new(1, 10, SortOrder::Asc).offset(), 0);
        assert_eq!(PaginationParams::new(3, 10, SortOrder::Asc).offset(), 20);
    }

    #[test]
    fn test_huge_values_are_clamped() {
        let params = query(Some("18446744073709551615"), Some("18446744073709551615"), None);

        assert_eq!(params.page, MAX_PAGINATION_VALUE);
        assert_eq!(params.limit, MAX_PAGINATION_VALUE);
        assert_eq!(params.offset(), MAX_PAGINATION_VALUE);
    }

    #[test]
    fn test_offset_saturates_instead_of_overflowing() {
        let params = PaginationParams::new(10_000_000_000, 10_000_000_000, SortOrder::Asc);
        assert_eq!(params.offset(), MAX_PAGINATION_VALUE);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let params = PaginationParams::new(1, 10, SortOrder::Asc);
        assert_eq!(params.total_pages(0), 0);
        assert_eq!(params.total_pages(10), 1);
        assert_eq!(params.total_pages(23), 3);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let page = ProductPage::new(vec![], &PaginationParams::default(), 23);
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["itemsAmount"], 0);
        assert_eq!(json["totalPages"], 3);
        assert!(json["products"].as_array().unwrap().is_empty());
    }
}
