use crate::constants::{CSV_COMPANY_NAME_HEADER, CSV_SYMBOL_HEADER};
use crate::models::CompanyRecord;
use crate::types::CompanyDirectory;
use crate::utils::read_source;
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::warn;
use std::io::{Cursor, Read};
use std::path::Path;

/// On-disk encodings of the company directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyDirectoryFormat {
    /// A JSON object mapping symbol to display name, in priority order.
    Json,
    /// A CSV file with `Symbol` and `Company Name` columns.
    Csv,
}

impl CompanyDirectoryFormat {
    /// Picks a format from the file extension, looking through a trailing `.gz`.
    ///
    /// Returns the format and whether the file is gzip-compressed.
    pub fn from_path(path: &Path) -> (Self, bool) {
        let is_gzipped = has_extension(path, "gz");
        let inner_path = if is_gzipped {
            path.with_extension("")
        } else {
            path.to_path_buf()
        };

        let format = if has_extension(&inner_path, "csv") {
            CompanyDirectoryFormat::Csv
        } else {
            CompanyDirectoryFormat::Json
        };

        (format, is_gzipped)
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(extension))
}

pub struct CompanyDirectoryLoader {}

impl CompanyDirectoryLoader {
    /// Loads the company directory from `path`, choosing a parser from its extension.
    pub fn load_company_directory(path: &Path) -> Result<CompanyDirectory, Error> {
        let bytes = read_source(path)?;

        let (format, is_gzipped) = CompanyDirectoryFormat::from_path(path);

        let directory = if is_gzipped {
            Self::extract_company_directory_from_gz_bytes(&bytes, format)
        } else {
            let text = String::from_utf8(bytes)
                .map_err(|e| Error::ParserError(format!("Company directory is not UTF-8: {}", e)));
            text.and_then(|text| Self::read_company_directory_from_str(&text, format))
        };

        directory.map_err(|e| e.at_path(path))
    }

    pub fn read_company_directory_from_str(
        text: &str,
        format: CompanyDirectoryFormat,
    ) -> Result<CompanyDirectory, Error> {
        match format {
            CompanyDirectoryFormat::Json => Self::read_company_directory_from_json_str(text),
            CompanyDirectoryFormat::Csv => Self::read_company_directory_from_csv_str(text),
        }
    }

    /// Parses a JSON object of `symbol -> display name`, keeping the object's key order.
    ///
    /// A `null` display name is read as an empty name.
    pub fn read_company_directory_from_json_str(json: &str) -> Result<CompanyDirectory, Error> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| Error::ParserError(format!("Failed to parse company directory: {}", e)))?;

        let mut directory = CompanyDirectory::with_capacity(map.len());

        for (symbol, value) in map {
            let display_name = match value {
                serde_json::Value::String(name) => name,
                serde_json::Value::Null => String::new(),
                other => {
                    return Err(Error::ParserError(format!(
                        "Display name for {:?} must be a string, found {}",
                        symbol, other
                    )))
                }
            };

            Self::push_record(&mut directory, &symbol, &display_name);
        }

        Ok(directory)
    }

    pub fn read_company_directory_from_csv_str(csv: &str) -> Result<CompanyDirectory, Error> {
        let mut directory = CompanyDirectory::new();

        // Use a cursor to simulate a file reader from the string
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(csv));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let column = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
        };
        let symbol_column = column(CSV_SYMBOL_HEADER)?;
        let company_name_column = column(CSV_COMPANY_NAME_HEADER)?;

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let symbol = record.get(symbol_column).unwrap_or_default();
            let display_name = record.get(company_name_column).unwrap_or_default();

            Self::push_record(&mut directory, symbol, display_name);
        }

        Ok(directory)
    }

    /// Decompresses a gzip-encoded directory and parses it in the given format.
    pub fn extract_company_directory_from_gz_bytes(
        read_bytes: &[u8],
        format: CompanyDirectoryFormat,
    ) -> Result<CompanyDirectory, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder
            .read_to_string(&mut decompressed_data)
            .map_err(|e| Error::ParserError(format!("Failed to decompress: {}", e)))?;

        Self::read_company_directory_from_str(&decompressed_data, format)
    }

    fn push_record(directory: &mut CompanyDirectory, symbol: &str, display_name: &str) {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            warn!(
                kind = "empty_symbol",
                company:% = display_name;
                "Skipping company directory entry without a symbol ({:?})",
                display_name
            );
            return;
        }

        directory.push(CompanyRecord::new(symbol, display_name.trim()));
    }
}
