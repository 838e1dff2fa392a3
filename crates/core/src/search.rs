//! Free-text search helpers.

/// Return the usable part of a search query, or `None` when the query is
/// missing or whitespace-only. Callers short-circuit to an empty page on
/// `None` without querying the store.
pub fn normalize_query(q: Option<&str>) -> Option<&str> {
    let trimmed = q?.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Build an `ILIKE` pattern that matches `term` as a literal substring.
///
/// `\`, `%` and `_` are escaped with a backslash (PostgreSQL's default LIKE
/// escape character).
///
/// # Examples
///
/// ```
/// use catalog_core::search::like_pattern;
/// assert_eq!(like_pattern("dark"), "%dark%");
/// assert_eq!(like_pattern("100%"), "%100\\%%");
/// ```
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_query_is_none() {
        assert_eq!(normalize_query(None), None);
    }

    #[test]
    fn whitespace_query_is_none() {
        assert_eq!(normalize_query(Some("")), None);
        assert_eq!(normalize_query(Some("   \t\n")), None);
    }

    #[test]
    fn query_is_trimmed() {
        assert_eq!(normalize_query(Some("  matrix ")), Some("matrix"));
    }

    #[test]
    fn pattern_wraps_plain_terms() {
        assert_eq!(like_pattern("Dark Knight"), "%Dark Knight%");
    }

    #[test]
    fn pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }
}
