//! Page/limit coercion and page-count arithmetic shared by every list endpoint.

use serde::Serialize;

/// Page used when the caller sends nothing usable.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller sends nothing usable.
pub const DEFAULT_PAGE_LIMIT: i64 = 12;

/// Largest page size a caller may request. Larger values are clamped.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// A resolved page request: both values are always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageRequest {
    /// Coerce raw query-string values into a page request.
    ///
    /// Missing, non-numeric and non-positive values fall back to the
    /// defaults. Fractional numbers are truncated. `limit` is clamped to
    /// `max_limit`.
    pub fn from_raw(page: Option<&str>, limit: Option<&str>, max_limit: i64) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(limit)
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .min(max_limit.max(1));
        Self { page, limit }
    }

    /// Number of rows to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    let value = match raw.parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            let f = raw.parse::<f64>().ok().filter(|f| f.is_finite())?;
            if f < 1.0 || f > i64::MAX as f64 {
                return None;
            }
            f.trunc() as i64
        }
    };
    (value >= 1).then_some(value)
}

/// `ceil(total / limit)`, with zero pages for an empty result.
pub fn page_count(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    total / limit + i64::from(total % limit != 0)
}

/// The `pagination` object of every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    pub fn new(request: PageRequest, total: i64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            pages: page_count(total, request.limit),
        }
    }

    /// Envelope for a short-circuited query that never touched the store.
    pub fn empty(request: PageRequest) -> Self {
        Self::new(request, 0)
    }
}
