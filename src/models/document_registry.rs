use crate::types::{DocumentRecord, TickerSymbol};
use crate::utils::read_source_to_string;
use crate::Error;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Symbol -> link data, as read from the document registry (`drive_links.json`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentRegistry {
    entries: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentLink {
    pub label: String,
    pub url: String,
}

/// A titled group of links, one per top-level key of a registry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSection {
    pub title: String,
    pub links: Vec<DocumentLink>,
}

impl DocumentRegistry {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = read_source_to_string(path)?;

        Self::from_json_str(&json).map_err(|e| e.at_path(path))
    }

    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::ParserError(format!("Failed to parse document registry: {}", e)))?;

        match value {
            Value::Object(entries) => Ok(Self { entries }),
            _ => Err(Error::ParserError(
                "Document registry must be a JSON object".to_string(),
            )),
        }
    }

    /// The record for `symbol`, or an empty object when the registry has none.
    pub fn record_or_empty(&self, symbol: &str) -> DocumentRecord {
        self.entries
            .get(symbol)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Registry keys in file order.
    pub fn symbols(&self) -> impl Iterator<Item = &TickerSymbol> {
        self.entries.keys()
    }

    pub fn into_json(self) -> Value {
        Value::Object(self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flattens a registry record into titled sections of links.
///
/// Each top-level key becomes a section. String leaves become links labelled by their key path
/// below that section (array items by 1-based position). A string at the top level becomes a
/// single-link section. Non-string leaves are skipped.
pub fn collect_document_sections(record: &DocumentRecord) -> Vec<DocumentSection> {
    let Value::Object(map) = record else {
        return Vec::new();
    };

    map.iter()
        .filter_map(|(title, value)| {
            let mut links = Vec::new();
            collect_links(value, "", &mut links);

            if links.is_empty() {
                return None;
            }

            // A bare URL under a top-level key: the key is the link's label too
            if let [link] = links.as_mut_slice() {
                if link.label.is_empty() {
                    link.label = title.clone();
                }
            }

            Some(DocumentSection {
                title: title.clone(),
                links,
            })
        })
        .collect()
}

fn collect_links(value: &Value, label: &str, links: &mut Vec<DocumentLink>) {
    match value {
        Value::String(url) if !url.trim().is_empty() => links.push(DocumentLink {
            label: label.to_string(),
            url: url.trim().to_string(),
        }),
        Value::Object(map) => {
            for (key, child) in map {
                collect_links(child, &join_label(label, key), links);
            }
        }
        Value::Array(items) => {
            for (position, child) in items.iter().enumerate() {
                collect_links(child, &join_label(label, &(position + 1).to_string()), links);
            }
        }
        _ => {}
    }
}

fn join_label(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{} / {}", prefix, key)
    }
}
