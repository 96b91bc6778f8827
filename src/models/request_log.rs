use crate::utils::write_file_atomically;
use crate::Error;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// A visitor-submitted "missing data" request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub quarter: String,
    #[serde(default, rename = "type")]
    pub request_type: String,
}

impl RequestRecord {
    pub fn new(
        company: impl Into<String>,
        quarter: impl Into<String>,
        request_type: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            quarter: quarter.into(),
            request_type: request_type.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.company.trim(),
            self.quarter.trim(),
            self.request_type.trim(),
        )
    }
}

/// Append-only JSON list of `RequestRecord`s.
///
/// Appends are serialized through an in-process lock and land via temp file + rename. Nothing
/// coordinates separate processes writing the same file.
#[derive(Debug)]
pub struct RequestLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RequestLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `record` and returns the number of entries now in the log.
    ///
    /// A missing log starts out empty. A log that is not a JSON list is reinitialized to empty
    /// before appending.
    pub fn append(&self, record: &RequestRecord) -> Result<usize, Error> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(err @ Error::SourceCorrupt { .. }) => {
                warn!(
                    kind = err.kind(),
                    path:% = self.path.display();
                    "Request log is corrupt, reinitializing it: {}",
                    err
                );
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        let entry =
            serde_json::to_value(record).map_err(|e| Error::ParserError(e.to_string()))?;
        entries.push(entry);

        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| Error::ParserError(e.to_string()))?;
        write_file_atomically(&self.path, json.as_bytes())?;

        info!(
            company:% = record.company,
            entries = entries.len();
            "Logged missing data request for {:?}",
            record.company
        );

        Ok(entries.len())
    }

    /// Reads every record in the log. A missing log reads as empty.
    pub fn records(&self) -> Result<Vec<RequestRecord>, Error> {
        self.read_entries()?
            .into_iter()
            .map(|entry| {
                serde_json::from_value(entry).map_err(|e| Error::SourceCorrupt {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }

    fn read_entries(&self) -> Result<Vec<Value>, Error> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::IoError(e)),
        };

        serde_json::from_slice::<Vec<Value>>(&bytes).map_err(|e| Error::SourceCorrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}
