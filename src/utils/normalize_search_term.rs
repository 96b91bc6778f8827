use crate::types::SearchTerm;

/// Normalizes a symbol, company name or user query into a search term.
///
/// Keys of the search map and incoming queries go through this same function, so lookups are
/// case-insensitive and ignore surrounding whitespace. Inner whitespace is left untouched.
pub fn normalize_search_term(text: &str) -> SearchTerm {
    text.trim().to_lowercase()
}
