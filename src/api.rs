mod dto;
mod error;
mod handlers;
pub mod pages;
pub mod sitemap;
mod state;

pub use error::ApiError;
pub use pages::{Page, PageRenderer};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(handlers::homepage))
        .route("/investor-desk", get(handlers::investor_desk))
        .route("/company/:symbol", get(handlers::company_page))
        .route("/search", get(handlers::search))
        .route("/request", get(handlers::request_form))
        .route("/submit-request", post(handlers::submit_request))
        .route("/api/presentations", get(handlers::presentations))
        .route("/api/search-map", get(handlers::search_map))
        .route("/sitemap.xml", get(handlers::sitemap))
        .route("/robots.txt", get(handlers::robots))
        .route("/health", get(handlers::health))
        .nest_service("/static", static_files)
        .with_state(state)
}
