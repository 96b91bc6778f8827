use std::sync::Arc;

use crate::api::pages::PageRenderer;
use crate::models::{AliasIndexStore, PortalConfig, RequestLog};
use crate::Error;

/// Shared state for all handlers
pub struct AppState {
    pub config: PortalConfig,
    pub search_map: AliasIndexStore,
    pub request_log: RequestLog,
    pub pages: PageRenderer,
}

impl AppState {
    /// Builds the state for a starting server, rebuilding the search map from the company
    /// directory (or falling back to the persisted one).
    pub fn from_config(config: PortalConfig) -> Result<Arc<Self>, Error> {
        let search_map = AliasIndexStore::load_or_rebuild(&config);
        Self::with_search_map(config, search_map)
    }

    pub fn with_search_map(
        config: PortalConfig,
        search_map: AliasIndexStore,
    ) -> Result<Arc<Self>, Error> {
        let pages = PageRenderer::new()?;
        let request_log = RequestLog::new(config.requests_path.clone());

        Ok(Arc::new(Self {
            config,
            search_map,
            request_log,
            pages,
        }))
    }
}
