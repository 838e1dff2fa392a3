//! Query-string parameter structs for the movie listing endpoints.
//!
//! Every field is kept as a raw string so that junk values fall back to
//! defaults instead of failing extraction. A query string that still cannot
//! be deserialized (a repeated key, say) is treated as empty.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use catalog_core::pagination::PageRequest;
use catalog_core::sort::MovieSort;
use serde::Deserialize;

/// `?page=&limit=`
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationParams {
    pub fn resolve(&self, max_limit: i64) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref(), max_limit)
    }
}

/// `?sortBy=&order=&page=&limit=`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl SortParams {
    pub fn sort(&self) -> MovieSort {
        MovieSort::from_params(self.sort_by.as_deref(), self.order.as_deref())
    }
}

/// `?q=&page=&limit=`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

/// Unwrap an optional [`Query`] extraction, using `T::default()` when the
/// query string is malformed.
pub fn or_default<T: Default>(extracted: Result<Query<T>, QueryRejection>) -> T {
    match extracted {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Ignoring malformed query string");
            T::default()
        }
    }
}
