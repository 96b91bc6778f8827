use crate::models::{AliasIndex, CompanyDirectoryLoader, PortalConfig};
use crate::Error;
use log::{info, warn};
use std::sync::{Arc, PoisonError, RwLock};

/// Loads the company directory, builds the search map and persists it.
///
/// Nothing is written when the directory cannot be loaded, so a previously persisted search map
/// stays in place.
pub fn rebuild_search_map(config: &PortalConfig) -> Result<AliasIndex, Error> {
    info!(
        path:% = config.companies_path.display();
        "Rebuilding search map from {}",
        config.companies_path.display()
    );

    let directory = CompanyDirectoryLoader::load_company_directory(&config.companies_path)?;
    let index = AliasIndex::build(&directory);
    index.write_to_path(&config.search_map_path)?;

    info!(
        path:% = config.search_map_path.display(),
        aliases = index.len();
        "Wrote search map to {}",
        config.search_map_path.display()
    );

    Ok(index)
}

/// Holds the live search map behind a swappable reference.
///
/// Readers take an `Arc` snapshot and never hold the lock while searching; a rebuild builds the
/// new index first and only then swaps it in.
#[derive(Debug, Default)]
pub struct AliasIndexStore {
    current: RwLock<Arc<AliasIndex>>,
}

impl AliasIndexStore {
    pub fn new(index: AliasIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    pub fn snapshot(&self) -> Arc<AliasIndex> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swaps in `index`, returning the previous one.
    pub fn replace(&self, index: AliasIndex) -> Arc<AliasIndex> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, Arc::new(index))
    }

    /// Rebuilds from the company directory and swaps the result in.
    ///
    /// On failure the current index is left untouched and the error is returned.
    pub fn rebuild(&self, config: &PortalConfig) -> Result<Arc<AliasIndex>, Error> {
        match rebuild_search_map(config) {
            Ok(index) => {
                self.replace(index);
                Ok(self.snapshot())
            }
            Err(err) => {
                warn!(
                    kind = err.kind(),
                    path:% = config.companies_path.display();
                    "Search map rebuild skipped, keeping {} existing aliases: {}",
                    self.snapshot().len(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Initial load for a starting server: rebuild, else the persisted artifact, else empty.
    pub fn load_or_rebuild(config: &PortalConfig) -> Self {
        let store = Self::default();

        if store.rebuild(config).is_ok() {
            return store;
        }

        match AliasIndex::read_from_path(&config.search_map_path) {
            Ok(index) => {
                info!(
                    path:% = config.search_map_path.display(),
                    aliases = index.len();
                    "Using persisted search map from {}",
                    config.search_map_path.display()
                );
                store.replace(index);
            }
            Err(err) => {
                warn!(
                    kind = err.kind(),
                    path:% = config.search_map_path.display();
                    "No usable search map, starting with an empty one: {}",
                    err
                );
            }
        }

        store
    }
}
