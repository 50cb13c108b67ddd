//! List-query vocabulary: status filter, free-text search, sort order.
//!
//! Parsing never fails. Unrecognized sort keys fall back to the default and
//! an unrecognized status simply matches nothing, so a stale client cannot
//! turn a listing request into an error.

// ---------------------------------------------------------------------------
// Status filter
// ---------------------------------------------------------------------------

/// Restriction on the `status` column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter {
    /// No restriction.
    All,
    /// Exact, case-sensitive match. A value outside the known status set is
    /// kept verbatim and yields an empty result.
    Exact(String),
}

impl StatusFilter {
    /// Parse a raw query-string value. Absent, empty, and the literal
    /// sentinel `All` mean no restriction.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::All,
            Some(s) if s.is_empty() || s == "All" => Self::All,
            Some(s) => Self::Exact(s.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

/// Sort order for lead listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recently created first. The default.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Client name, ascending.
    Name,
}

impl SortKey {
    /// Parse a raw query-string value. Anything unrecognized falls back
    /// to [`SortKey::Newest`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("oldest") => Self::Oldest,
            Some("name") => Self::Name,
            _ => Self::Newest,
        }
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Build a `LIKE`/`ILIKE` pattern that matches `term` as a literal
/// substring. `\`, `%`, and `_` in the term are escaped so user input
/// cannot smuggle in wildcards.
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

// ---------------------------------------------------------------------------
// Combined query
// ---------------------------------------------------------------------------

/// A parsed list query. All parts are optional and combine with AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadQuery {
    pub status: StatusFilter,
    /// Raw search term (not yet a pattern). `None` when absent or empty.
    pub search: Option<String>,
    pub sort: SortKey,
}

impl Default for LeadQuery {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            search: None,
            sort: SortKey::Newest,
        }
    }
}

impl LeadQuery {
    /// Parse the three raw query-string parameters.
    pub fn from_params(status: Option<&str>, search: Option<&str>, sort: Option<&str>) -> Self {
        Self {
            status: StatusFilter::parse(status),
            search: search
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
            sort: SortKey::parse(sort),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- StatusFilter tests ---------------------------------------------------

    #[test]
    fn status_filter_absent_empty_and_all_mean_no_restriction() {
        assert_eq!(StatusFilter::parse(None), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("")), StatusFilter::All);
        assert_eq!(StatusFilter::parse(Some("All")), StatusFilter::All);
    }

    #[test]
    fn status_filter_keeps_exact_value() {
        assert_eq!(
            StatusFilter::parse(Some("Contacted")),
            StatusFilter::Exact("Contacted".to_string())
        );
    }

    #[test]
    fn status_filter_sentinel_is_case_sensitive() {
        assert_eq!(
            StatusFilter::parse(Some("all")),
            StatusFilter::Exact("all".to_string())
        );
    }

    // -- SortKey tests --------------------------------------------------------

    #[test]
    fn sort_key_recognizes_known_values() {
        assert_eq!(SortKey::parse(Some("oldest")), SortKey::Oldest);
        assert_eq!(SortKey::parse(Some("name")), SortKey::Name);
    }

    #[test]
    fn sort_key_defaults_to_newest() {
        assert_eq!(SortKey::parse(None), SortKey::Newest);
        assert_eq!(SortKey::parse(Some("newest")), SortKey::Newest);
        assert_eq!(SortKey::parse(Some("company")), SortKey::Newest);
        assert_eq!(SortKey::parse(Some("NAME")), SortKey::Newest);
    }

    // -- like_pattern tests ---------------------------------------------------

    #[test]
    fn like_pattern_wraps_term_in_wildcards() {
        assert_eq!(like_pattern("cloud"), "%cloud%");
    }

    #[test]
    fn like_pattern_escapes_special_characters() {
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern(r"a\b"), "%a\\\\b%");
    }

    // -- LeadQuery tests ------------------------------------------------------

    #[test]
    fn from_params_drops_empty_search() {
        let query = LeadQuery::from_params(None, Some(""), None);
        assert_eq!(query, LeadQuery::default());
    }

    #[test]
    fn from_params_combines_all_parts() {
        let query = LeadQuery::from_params(Some("Meeting"), Some("cloud"), Some("oldest"));
        assert_eq!(query.status, StatusFilter::Exact("Meeting".to_string()));
        assert_eq!(query.search.as_deref(), Some("cloud"));
        assert_eq!(query.sort, SortKey::Oldest);
    }
}
