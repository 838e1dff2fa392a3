//! Parsing of the `sortBy` / `order` query parameters.

/// A sortable movie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Rating,
    ReleaseDate,
    Duration,
}

impl SortField {
    /// Map a `sortBy` value onto a field. `name` sorts by title.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortField::Title),
            "rating" => Some(SortField::Rating),
            "releaseDate" => Some(SortField::ReleaseDate),
            "duration" => Some(SortField::Duration),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Only the exact value `asc` selects ascending order.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Ordering applied to a movie listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MovieSort {
    /// Most recently created first.
    #[default]
    Newest,
    By(SortField, SortOrder),
}

impl MovieSort {
    /// Resolve query parameters. An unknown or missing `sortBy` falls back to
    /// [`MovieSort::Newest`] and `order` is ignored.
    pub fn from_params(sort_by: Option<&str>, order: Option<&str>) -> Self {
        match sort_by.and_then(SortField::from_param) {
            Some(field) => MovieSort::By(field, SortOrder::from_param(order)),
            None => MovieSort::Newest,
        }
    }
}
