use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{DocumentSection, RequestRecord};

/// GET /search query string
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /request query string
#[derive(Debug, Default, Deserialize)]
pub struct RequestFormQuery {
    #[serde(default)]
    pub company: String,
}

/// POST /submit-request form body
#[derive(Debug, Deserialize)]
pub struct RequestForm {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub quarter: String,
    #[serde(default, rename = "type")]
    pub request_type: String,
}

impl From<RequestForm> for RequestRecord {
    fn from(form: RequestForm) -> Self {
        RequestRecord::new(form.company, form.quarter, form.request_type).trimmed()
    }
}

/// GET /api/presentations body when the registry cannot be read
#[derive(Debug, Serialize)]
pub struct PresentationsUnavailable {
    pub error: String,
    pub data: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub title: &'static str,
    pub search_map_url: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InvestorDeskPage {
    pub title: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CompanyPage {
    pub title: String,
    pub symbol: String,
    pub display_name: String,
    pub sections: Vec<DocumentSection>,
    pub has_documents: bool,
    pub request_url: String,
}

#[derive(Debug, Serialize)]
pub struct RequestFormPage {
    pub title: &'static str,
    pub company: String,
}

#[derive(Debug, Serialize)]
pub struct RequestSubmittedPage {
    pub title: &'static str,
    pub request: RequestRecord,
}
