use crate::constants::{LIMITED_TOKEN, SHORT_NAME_TOKEN_COUNT};
use crate::types::SearchTerm;

/// Derives the two-token short name from an already-normalized company name.
///
/// Every occurrence of `"limited"` is removed (as a substring, so `"unlimited"` becomes
/// `"un"`), then the first two whitespace-separated tokens are joined with a single space.
/// Returns `None` when fewer than two tokens remain.
pub fn short_company_name(normalized_company_name: &str) -> Option<SearchTerm> {
    let stripped = normalized_company_name.replace(LIMITED_TOKEN, "");

    let tokens: Vec<&str> = stripped
        .split_whitespace()
        .take(SHORT_NAME_TOKEN_COUNT)
        .collect();

    if tokens.len() < SHORT_NAME_TOKEN_COUNT {
        return None;
    }

    Some(tokens.join(" "))
}
