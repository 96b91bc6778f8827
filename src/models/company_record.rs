use crate::types::{CompanyName, TickerSymbol};
use crate::utils::normalize_search_term;
use serde::{Deserialize, Serialize};

/// One entry of the company directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub symbol: TickerSymbol,
    pub display_name: CompanyName,
}

impl CompanyRecord {
    pub fn new(symbol: impl Into<TickerSymbol>, display_name: impl Into<CompanyName>) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
        }
    }

    /// Returns `true` if `symbol` names this company, ignoring case and surrounding whitespace.
    pub fn matches_symbol(&self, symbol: &str) -> bool {
        normalize_search_term(&self.symbol) == normalize_search_term(symbol)
    }
}

/// Finds the directory record for `symbol`, ignoring case and surrounding whitespace.
pub fn find_company<'a>(directory: &'a [CompanyRecord], symbol: &str) -> Option<&'a CompanyRecord> {
    directory.iter().find(|record| record.matches_symbol(symbol))
}
