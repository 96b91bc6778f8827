use crate::models::CompanyRecord;
use crate::types::{SearchTerm, TickerSymbol};
use crate::utils::{
    normalize_search_term, read_source_to_string, short_company_name, write_file_atomically,
};
use crate::Error;
use log::{debug, info};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// The kind of alias a search term was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasKind {
    Symbol,
    CompanyName,
    ShortCompanyName,
}

impl fmt::Display for AliasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasKind::Symbol => write!(f, "symbol"),
            AliasKind::CompanyName => write!(f, "company name"),
            AliasKind::ShortCompanyName => write!(f, "short company name"),
        }
    }
}

/// Maps normalized search terms (symbols, company names, short company names) to canonical
/// ticker symbols.
///
/// Terms are unique and the first term inserted wins; later candidates for the same term are
/// dropped. Entries keep their insertion order, which is also the order they are serialized in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasIndex {
    aliases: Vec<(SearchTerm, TickerSymbol)>,
    positions: HashMap<SearchTerm, usize>,
}

impl AliasIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from an ordered company directory.
    ///
    /// For every record, in order, this inserts the normalized symbol, the normalized display
    /// name, and the two-token short name (with `"limited"` removed). Records earlier in the
    /// directory take precedence on collisions. The directory is not modified.
    pub fn build(directory: &[CompanyRecord]) -> Self {
        let mut index = Self {
            aliases: Vec::with_capacity(directory.len() * 3),
            positions: HashMap::with_capacity(directory.len() * 3),
        };

        for record in directory {
            index.ingest_company_record(record);
        }

        info!(
            companies = directory.len(),
            aliases = index.len();
            "Built search map with {} aliases from {} companies",
            index.len(),
            directory.len()
        );

        index
    }

    fn ingest_company_record(&mut self, record: &CompanyRecord) {
        let symbol_key = normalize_search_term(&record.symbol);
        if symbol_key.is_empty() {
            debug!(kind = "empty_symbol"; "Skipping company record without a symbol");
            return;
        }

        self.insert(symbol_key, &record.symbol, AliasKind::Symbol);

        let name_key = normalize_search_term(&record.display_name);
        if name_key.is_empty() {
            return;
        }

        let short_key = short_company_name(&name_key);
        self.insert(name_key, &record.symbol, AliasKind::CompanyName);

        if let Some(short_key) = short_key {
            self.insert(short_key, &record.symbol, AliasKind::ShortCompanyName);
        }
    }

    /// Inserts `term -> symbol` unless `term` is already present. Returns `true` if inserted.
    pub fn insert(
        &mut self,
        term: SearchTerm,
        symbol: &TickerSymbol,
        alias_kind: AliasKind,
    ) -> bool {
        if let Some(&position) = self.positions.get(&term) {
            let (_, existing_symbol) = &self.aliases[position];
            if existing_symbol != symbol {
                debug!(
                    kind = "alias_collision",
                    symbol = symbol.as_str(),
                    kept = existing_symbol.as_str();
                    "Dropping {} alias {:?} for {}; already mapped to {}",
                    alias_kind,
                    term,
                    symbol,
                    existing_symbol
                );
            }
            return false;
        }

        self.positions.insert(term.clone(), self.aliases.len());
        self.aliases.push((term, symbol.clone()));
        true
    }

    /// Looks up a query after normalizing it the same way keys are normalized.
    pub fn lookup(&self, query: &str) -> Option<&TickerSymbol> {
        let term = normalize_search_term(query);
        self.positions
            .get(&term)
            .map(|&position| &self.aliases[position].1)
    }

    /// Resolves a query to its canonical symbol, or `Error::NotFound`.
    pub fn resolve(&self, query: &str) -> Result<&TickerSymbol, Error> {
        self.lookup(query)
            .ok_or_else(|| Error::NotFound(format!("No company matches {:?}", query.trim())))
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.positions.contains_key(term)
    }

    /// Iterates `(term, symbol)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SearchTerm, &TickerSymbol)> {
        self.aliases.iter().map(|(term, symbol)| (term, symbol))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn to_json_string(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|e| Error::ParserError(e.to_string()))
    }

    /// Parses a previously persisted search map. Every value must be a string.
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| Error::ParserError(format!("Failed to parse search map: {}", e)))?;

        let mut index = Self::new();
        for (term, value) in map {
            let symbol = value.as_str().ok_or_else(|| {
                Error::ParserError(format!("Search map value for {:?} is not a string", term))
            })?;
            index.insert(term, &symbol.to_string(), AliasKind::Symbol);
        }

        Ok(index)
    }

    /// Persists the index as a JSON object, replacing any previous artifact atomically.
    pub fn write_to_path(&self, path: &Path) -> Result<(), Error> {
        let json = self.to_json_string()?;
        write_file_atomically(path, json.as_bytes())?;
        Ok(())
    }

    pub fn read_from_path(path: &Path) -> Result<Self, Error> {
        let json = read_source_to_string(path)?;

        Self::from_json_str(&json).map_err(|e| e.at_path(path))
    }
}

impl Serialize for AliasIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.aliases.len()))?;
        for (term, symbol) in &self.aliases {
            map.serialize_entry(term, symbol)?;
        }
        map.end()
    }
}
