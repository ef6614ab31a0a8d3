//! Shared request/response types.

mod pagination;

pub use pagination::{ListQuery, PaginationParams, ProductPage, SortOrder};
