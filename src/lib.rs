pub mod api;
mod constants;
pub mod models;
pub use models::{
    rebuild_search_map, AliasIndex, AliasIndexStore, AliasKind, CompanyDirectoryFormat,
    CompanyDirectoryLoader, CompanyRecord, DocumentRegistry, Error, PortalConfig, RequestLog,
    RequestRecord,
};
pub mod types;
mod utils;
pub use types::{CompanyDirectory, CompanyName, DocumentRecord, SearchTerm, TickerSymbol};
pub use utils::normalize_search_term;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Builds the search map for an ordered company directory.
///
/// See [`AliasIndex::build`].
pub fn generate_search_map(company_directory: &[CompanyRecord]) -> AliasIndex {
    AliasIndex::build(company_directory)
}

/// Resolves a user query or URL segment to a canonical ticker symbol.
pub fn resolve_symbol<'a>(search_map: &'a AliasIndex, query: &str) -> Result<&'a TickerSymbol, Error> {
    search_map.resolve(query)
}
