use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use log::{info, warn};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::dto::*;
use super::error::ApiError;
use super::pages::Page;
use super::sitemap::{company_path, render_robots, render_sitemap};
use super::state::AppState;
use crate::models::{
    collect_document_sections, find_company, CompanyDirectoryLoader, DocumentRegistry,
    RequestRecord,
};
use crate::Error;

/// GET / - Homepage with the company search box
pub async fn homepage(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let html = state.pages.render(
        Page::Home,
        &HomePage {
            title: "Home",
            search_map_url: "/api/search-map",
        },
    )?;

    Ok(Html(html))
}

/// GET /investor-desk - Presentations dashboard (data loaded client-side)
pub async fn investor_desk(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let html = state.pages.render(
        Page::InvestorDesk,
        &InvestorDeskPage {
            title: "Investor Desk",
        },
    )?;

    Ok(Html(html))
}

/// GET /company/:symbol - Company documents page
///
/// The path segment may be a symbol, a full company name or a short name; it is resolved
/// through the search map first.
pub async fn company_page(
    State(state): State<Arc<AppState>>,
    Path(segment): Path<String>,
) -> Result<Html<String>, ApiError> {
    let directory = CompanyDirectoryLoader::load_company_directory(&state.config.companies_path)?;

    let search_map = state.search_map.snapshot();
    let symbol = search_map
        .lookup(&segment)
        .cloned()
        .unwrap_or_else(|| segment.trim().to_string());

    let company = find_company(&directory, &symbol).ok_or_else(|| {
        Error::NotFound(format!("No company with symbol {:?}", segment.trim()))
    })?;

    let registry = DocumentRegistry::load(&state.config.drive_links_path)?;
    let record = registry.record_or_empty(&company.symbol);
    let sections = collect_document_sections(&record);

    let display_name = if company.display_name.is_empty() {
        company.symbol.clone()
    } else {
        company.display_name.clone()
    };

    let html = state.pages.render(
        Page::Company,
        &CompanyPage {
            title: display_name.clone(),
            symbol: company.symbol.clone(),
            display_name,
            has_documents: !sections.is_empty(),
            sections,
            request_url: format!(
                "/request?company={}",
                urlencoding::encode(&company.symbol)
            ),
        },
    )?;

    Ok(Html(html))
}

/// GET /search?q= - Resolve a typed query and redirect to the company page
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Redirect, ApiError> {
    let search_map = state.search_map.snapshot();
    let symbol = search_map.resolve(&query.q)?;

    Ok(Redirect::to(&company_path(symbol)))
}

/// GET /request - Missing data request form
pub async fn request_form(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RequestFormQuery>,
) -> Result<Html<String>, ApiError> {
    let html = state.pages.render(
        Page::RequestForm,
        &RequestFormPage {
            title: "Request Data",
            company: query.company.trim().to_string(),
        },
    )?;

    Ok(Html(html))
}

/// POST /submit-request - Append a missing data request to the request log
///
/// Log failures are not surfaced to the visitor.
pub async fn submit_request(
    State(state): State<Arc<AppState>>,
    Form(form): Form<RequestForm>,
) -> Result<Html<String>, ApiError> {
    let request = RequestRecord::from(form);

    if let Err(err) = state.request_log.append(&request) {
        warn!(
            kind = err.kind(),
            path:% = state.request_log.path().display(),
            company:% = request.company;
            "Failed to log missing data request: {}",
            err
        );
    }

    let html = state.pages.render(
        Page::RequestSubmitted,
        &RequestSubmittedPage {
            title: "Request Received",
            request,
        },
    )?;

    Ok(Html(html))
}

/// GET /api/presentations - The document registry as JSON
///
/// Always 200; a missing or corrupt registry yields `{ "error": ..., "data": {} }`.
pub async fn presentations(State(state): State<Arc<AppState>>) -> Response {
    match DocumentRegistry::load(&state.config.drive_links_path) {
        Ok(registry) => Json(registry.into_json()).into_response(),
        Err(err) => {
            warn!(
                kind = err.kind(),
                path:% = state.config.drive_links_path.display();
                "Serving empty presentations: {}",
                err
            );

            Json(PresentationsUnavailable {
                error: presentations_error_message(&err),
                data: Map::new(),
            })
            .into_response()
        }
    }
}

fn presentations_error_message(err: &Error) -> String {
    match err {
        Error::SourceUnavailable { path } => format!(
            "{} not found",
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        ),
        Error::SourceCorrupt { .. } => "Document registry is corrupt".to_string(),
        other => other.to_string(),
    }
}

/// GET /api/search-map - The live search map
pub async fn search_map(State(state): State<Arc<AppState>>) -> Json<Value> {
    let search_map = state.search_map.snapshot();
    Json(serde_json::to_value(&*search_map).unwrap_or_else(|_| Value::Object(Map::new())))
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let registry = DocumentRegistry::load(&state.config.drive_links_path).unwrap_or_else(|err| {
        warn!(
            kind = err.kind(),
            path:% = state.config.drive_links_path.display();
            "Sitemap lists no companies: {}",
            err
        );
        DocumentRegistry::default()
    });

    let xml = render_sitemap(&state.config.base_url, registry.symbols());
    info!(urls = registry.len() + 1; "Rendered sitemap");

    ([(header::CONTENT_TYPE, "application/xml")], xml)
}

/// GET /robots.txt
pub async fn robots(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render_robots(&state.config.base_url),
    )
}

/// GET /health - Liveness check
pub async fn health() -> &'static str {
    "OK"
}
