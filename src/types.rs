use crate::models::CompanyRecord;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`. Symbols stored in the
/// search map are always in their canonical form, exactly as the company directory lists them.
pub type TickerSymbol = String;

/// Represents the display name of a company as an owned `String`.
pub type CompanyName = String;

/// A normalized (trimmed, lower-cased) term that resolves to a ticker symbol.
pub type SearchTerm = String;

/// The company directory as an ordered list of records.
///
/// Order matters: when two records produce the same search term, the record listed first
/// keeps it.
pub type CompanyDirectory = Vec<CompanyRecord>;

/// Structured link data for a single company, as stored in the document registry.
pub type DocumentRecord = serde_json::Value;
