use csv::Reader;
use investor_desk::{CompanyDirectory, CompanyRecord, PortalConfig};
use std::error::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub mod constants;
pub use constants::{SAMPLE_COMPANIES_JSON, SAMPLE_DRIVE_LINKS_JSON, TEST_COMPANIES_CSV_FILE_PATH};

/// Utility to load a company directory from a two-column CSV file for testing and benchmarking.
pub fn load_companies_from_file(file_path: &str) -> Result<CompanyDirectory, Box<dyn Error>> {
    let mut directory = CompanyDirectory::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            directory.push(CompanyRecord::new(&record[0], &record[1]));
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(directory)
}

/// Small directory covering collisions, "limited" suffixes and single-token names.
pub fn sample_company_directory() -> CompanyDirectory {
    vec![
        CompanyRecord::new("TCS", "Tata Consultancy Services Limited"),
        CompanyRecord::new("TCL", "Tata Consultancy Labs"),
        CompanyRecord::new("INFY", "Infosys Limited"),
        CompanyRecord::new("RELIANCE", "Reliance Industries Limited"),
        CompanyRecord::new("M&M", "Mahindra & Mahindra Limited"),
        CompanyRecord::new("WIPRO", "Wipro Limited"),
    ]
}

/// A temporary on-disk portal layout (company directory, registry, static dir).
pub struct PortalFixture {
    pub dir: TempDir,
    pub config: PortalConfig,
}

impl PortalFixture {
    /// Layout with the sample company directory and document registry written out.
    pub fn new() -> Self {
        let fixture = Self::empty();
        fixture.write_companies(SAMPLE_COMPANIES_JSON);
        fixture.write_drive_links(SAMPLE_DRIVE_LINKS_JSON);
        fixture
    }

    /// Layout with no source files at all.
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = PortalConfig::with_data_dir(dir.path());
        config.base_url = "https://portal.test".to_string();
        fs::create_dir_all(&config.static_dir).expect("Failed to create static dir");

        Self { dir, config }
    }

    pub fn write_companies(&self, contents: &str) {
        write_with_parents(&self.config.companies_path, contents.as_bytes());
    }

    pub fn write_drive_links(&self, contents: &str) {
        write_with_parents(&self.config.drive_links_path, contents.as_bytes());
    }

    pub fn write_requests(&self, contents: &str) {
        write_with_parents(&self.config.requests_path, contents.as_bytes());
    }

    pub fn read_requests(&self) -> serde_json::Value {
        let json = fs::read_to_string(&self.config.requests_path).expect("Failed to read requests");
        serde_json::from_str(&json).expect("Request log is not valid JSON")
    }
}

impl Default for PortalFixture {
    fn default() -> Self {
        Self::new()
    }
}

fn write_with_parents(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, contents).expect("Failed to write fixture file");
}
