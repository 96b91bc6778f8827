use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_COMPANIES_PATH, DEFAULT_DRIVE_LINKS_PATH, DEFAULT_HOST,
    DEFAULT_PORT, DEFAULT_REQUESTS_PATH, DEFAULT_SEARCH_MAP_FILE_NAME, DEFAULT_STATIC_DIR,
    ENV_BASE_URL, ENV_COMPANIES_PATH, ENV_DRIVE_LINKS_PATH, ENV_HOST, ENV_PORT,
    ENV_REQUESTS_PATH, ENV_SEARCH_MAP_PATH, ENV_STATIC_DIR,
};
use log::warn;
use std::env;
use std::path::{Path, PathBuf};

/// Locations and network settings for the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub host: String,
    pub port: u16,
    /// Absolute site URL used in the sitemap and robots.txt, without a trailing slash.
    pub base_url: String,
    pub companies_path: PathBuf,
    pub drive_links_path: PathBuf,
    pub requests_path: PathBuf,
    pub static_dir: PathBuf,
    /// Where the derived search map is persisted. Should live under `static_dir`.
    pub search_map_path: PathBuf,
}

impl Default for PortalConfig {
    fn default() -> Self {
        let static_dir = PathBuf::from(DEFAULT_STATIC_DIR);

        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_url: DEFAULT_BASE_URL.to_string(),
            companies_path: PathBuf::from(DEFAULT_COMPANIES_PATH),
            drive_links_path: PathBuf::from(DEFAULT_DRIVE_LINKS_PATH),
            requests_path: PathBuf::from(DEFAULT_REQUESTS_PATH),
            search_map_path: static_dir.join(DEFAULT_SEARCH_MAP_FILE_NAME),
            static_dir,
        }
    }
}

impl PortalConfig {
    /// Reads the configuration from environment variables, falling back to defaults.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let path_var = |key: &str, default: PathBuf| lookup(key).map(PathBuf::from).unwrap_or(default);

        let port = match lookup(ENV_PORT) {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                warn!(
                    kind = "invalid_config",
                    variable = ENV_PORT,
                    value:% = raw;
                    "Ignoring invalid {} value {:?}; using {}",
                    ENV_PORT,
                    raw,
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let static_dir = path_var(ENV_STATIC_DIR, defaults.static_dir);
        let search_map_path = path_var(
            ENV_SEARCH_MAP_PATH,
            static_dir.join(DEFAULT_SEARCH_MAP_FILE_NAME),
        );

        Self {
            host: lookup(ENV_HOST).unwrap_or(defaults.host),
            port,
            base_url: lookup(ENV_BASE_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            companies_path: path_var(ENV_COMPANIES_PATH, defaults.companies_path),
            drive_links_path: path_var(ENV_DRIVE_LINKS_PATH, defaults.drive_links_path),
            requests_path: path_var(ENV_REQUESTS_PATH, defaults.requests_path),
            static_dir,
            search_map_path,
        }
    }

    /// Default layout rooted at `data_dir` instead of the working directory.
    pub fn with_data_dir(data_dir: &Path) -> Self {
        let defaults = Self::default();

        Self {
            companies_path: data_dir.join(&defaults.companies_path),
            drive_links_path: data_dir.join(&defaults.drive_links_path),
            requests_path: data_dir.join(&defaults.requests_path),
            static_dir: data_dir.join(&defaults.static_dir),
            search_map_path: data_dir.join(&defaults.search_map_path),
            ..defaults
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
