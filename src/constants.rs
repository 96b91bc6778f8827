/// Token stripped from company names before deriving the two-token short name.
pub const LIMITED_TOKEN: &str = "limited";

/// Number of leading name tokens that make up a short company name.
pub const SHORT_NAME_TOKEN_COUNT: usize = 2;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_COMPANIES_PATH: &str = "data/companies.json";
pub const DEFAULT_DRIVE_LINKS_PATH: &str = "drive_links.json";
pub const DEFAULT_REQUESTS_PATH: &str = "data/requests.json";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_SEARCH_MAP_FILE_NAME: &str = "search_map.json";

pub const ENV_HOST: &str = "PORTAL_HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_BASE_URL: &str = "PORTAL_BASE_URL";
pub const ENV_COMPANIES_PATH: &str = "PORTAL_COMPANIES_PATH";
pub const ENV_DRIVE_LINKS_PATH: &str = "PORTAL_DRIVE_LINKS_PATH";
pub const ENV_REQUESTS_PATH: &str = "PORTAL_REQUESTS_PATH";
pub const ENV_STATIC_DIR: &str = "PORTAL_STATIC_DIR";
pub const ENV_SEARCH_MAP_PATH: &str = "PORTAL_SEARCH_MAP_PATH";

/// CSV header holding the ticker symbol.
pub const CSV_SYMBOL_HEADER: &str = "Symbol";

/// CSV header holding the company display name.
pub const CSV_COMPANY_NAME_HEADER: &str = "Company Name";
