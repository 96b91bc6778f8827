use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use investor_desk::api::{self, AppState};
use investor_desk::PortalConfig;
use serde_json::{json, Value};
use test_utils::{PortalFixture, SAMPLE_DRIVE_LINKS_JSON};
use tower::ServiceExt;

struct TestResponse {
    status: StatusCode,
    location: Option<String>,
    content_type: Option<String>,
    body: String,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("Response body is not JSON")
    }
}

fn build_app(config: &PortalConfig) -> Router {
    let state = AppState::from_config(config.clone()).expect("Failed to build app state");
    api::router(state)
}

async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("Request failed");

    let header_value = |name: header::HeaderName| {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
    };
    let status = response.status();
    let location = header_value(header::LOCATION);
    let content_type = header_value(header::CONTENT_TYPE);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    TestResponse {
        status,
        location,
        content_type,
        body: String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8"),
    }
}

async fn get(config: &PortalConfig, uri: &str) -> TestResponse {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(build_app(config), request).await
}

async fn post_form(config: &PortalConfig, uri: &str, form: &str) -> TestResponse {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(build_app(config), request).await
}

#[cfg(test)]
mod page_tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let fixture = PortalFixture::new();
        let response = get(&fixture.config, "/health").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, "OK");
    }

    #[tokio::test]
    async fn test_homepage_and_investor_desk_render() {
        let fixture = PortalFixture::new();

        let home = get(&fixture.config, "/").await;
        assert_eq!(home.status, StatusCode::OK);
        assert!(home.body.contains("action=\"/search\""));

        let desk = get(&fixture.config, "/investor-desk").await;
        assert_eq!(desk.status, StatusCode::OK);
        assert!(desk.body.contains("/static/js/investor_desk.js"));
    }

    #[tokio::test]
    async fn test_request_form_prefills_company() {
        let fixture = PortalFixture::new();
        let response = get(&fixture.config, "/request?company=TCS").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("value=\"TCS\""));
    }

    #[tokio::test]
    async fn test_robots() {
        let fixture = PortalFixture::new();
        let response = get(&fixture.config, "/robots.txt").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response
            .body
            .contains("Sitemap: https://portal.test/sitemap.xml"));
    }
}

#[cfg(test)]
mod company_page_tests {
    use super::*;

    #[tokio::test]
    async fn test_company_page_by_symbol() {
        let fixture = PortalFixture::new();
        let response = get(&fixture.config, "/company/TCS").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("Tata Consultancy Services Limited"));
        assert!(response.body.contains("Q1 FY25"));
        assert!(response
            .body
            .contains("https://drive.example/tcs-q1-presentation"));
    }

    #[tokio::test]
    async fn test_company_page_resolves_names_and_case() {
        let fixture = PortalFixture::new();

        for uri in [
            "/company/infy",
            "/company/Infosys%20Limited",
            "/company/tata%20consultancy",
        ] {
            let response = get(&fixture.config, uri).await;
            assert_eq!(response.status, StatusCode::OK, "{}", uri);
        }

        let short_name = get(&fixture.config, "/company/tata%20consultancy").await;
        assert!(short_name.body.contains("Tata Consultancy Services Limited"));
    }

    #[tokio::test]
    async fn test_unknown_company_is_not_found() {
        let fixture = PortalFixture::new();
        let response = get(&fixture.config, "/company/UNKNOWN").await;

        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_company_without_documents_renders_empty_record() {
        let fixture = PortalFixture::new();
        let response = get(&fixture.config, "/company/NEWCO").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("No documents are available for NEWCO"));
        assert!(response.body.contains("/request?company=NEWCO"));
    }

    #[tokio::test]
    async fn test_missing_company_directory_is_internal_error() {
        let fixture = PortalFixture::empty();
        fixture.write_drive_links(SAMPLE_DRIVE_LINKS_JSON);

        let response = get(&fixture.config, "/company/TCS").await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_corrupt_company_directory_is_internal_error() {
        let fixture = PortalFixture::new();
        let app = build_app(&fixture.config);
        fixture.write_companies("{ broken");

        let request = Request::get("/company/TCS").body(Body::empty()).unwrap();
        let response = send(app, request).await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_corrupt_document_registry_is_internal_error() {
        let fixture = PortalFixture::new();
        fixture.write_drive_links("{ broken");

        let response = get(&fixture.config, "/company/TCS").await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_missing_document_registry_is_internal_error() {
        let fixture = PortalFixture::new();
        std::fs::remove_file(&fixture.config.drive_links_path).unwrap();

        let response = get(&fixture.config, "/company/TCS").await;

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}

#[cfg(test)]
mod search_tests {
    use super::*;

    #[tokio::test]
    async fn test_search_redirects_to_company_page() {
        let fixture = PortalFixture::new();

        let response = get(&fixture.config, "/search?q=Tata+Consultancy").await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(response.location.as_deref(), Some("/company/TCS"));

        let response = get(&fixture.config, "/search?q=m%26m").await;
        assert_eq!(response.location.as_deref(), Some("/company/M%26M"));
    }

    #[tokio::test]
    async fn test_search_without_match_is_not_found() {
        let fixture = PortalFixture::new();

        assert_eq!(
            get(&fixture.config, "/search?q=tata").await.status,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get(&fixture.config, "/search").await.status,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_search_map_endpoint_and_static_artifact() {
        let fixture = PortalFixture::new();

        let live = get(&fixture.config, "/api/search-map").await;
        assert_eq!(live.status, StatusCode::OK);
        assert_eq!(live.json()["tata consultancy"], "TCS");
        assert_eq!(live.json()["tata consultancy labs"], "TCL");

        let persisted = get(&fixture.config, "/static/search_map.json").await;
        assert_eq!(persisted.status, StatusCode::OK);
        assert_eq!(persisted.json(), live.json());
    }
}

#[cfg(test)]
mod presentations_tests {
    use super::*;

    #[tokio::test]
    async fn test_presentations_serves_registry() {
        let fixture = PortalFixture::new();
        let response = get(&fixture.config, "/api/presentations").await;

        assert_eq!(response.status, StatusCode::OK);
        let expected: Value = serde_json::from_str(SAMPLE_DRIVE_LINKS_JSON).unwrap();
        assert_eq!(response.json(), expected);
    }

    #[tokio::test]
    async fn test_missing_registry_is_ok_with_error() {
        let fixture = PortalFixture::empty();
        let response = get(&fixture.config, "/api/presentations").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.json(),
            json!({"error": "drive_links.json not found", "data": {}})
        );
    }

    #[tokio::test]
    async fn test_corrupt_registry_is_ok_with_error() {
        let fixture = PortalFixture::new();
        fixture.write_drive_links("{ broken");

        let response = get(&fixture.config, "/api/presentations").await;
        let body = response.json();

        assert_eq!(response.status, StatusCode::OK);
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert_eq!(body["data"], json!({}));
    }

    #[tokio::test]
    async fn test_non_utf8_registry_is_reported_corrupt() {
        let fixture = PortalFixture::new();
        std::fs::write(&fixture.config.drive_links_path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        let response = get(&fixture.config, "/api/presentations").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.json(),
            json!({"error": "Document registry is corrupt", "data": {}})
        );
    }
}

#[cfg(test)]
mod sitemap_tests {
    use super::*;

    #[tokio::test]
    async fn test_sitemap_lists_registry_companies() {
        let fixture = PortalFixture::new();
        let response = get(&fixture.config, "/sitemap.xml").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.content_type.as_deref(), Some("application/xml"));
        for loc in [
            "https://portal.test/company/TCS",
            "https://portal.test/company/INFY",
            "https://portal.test/company/M%26M",
            "https://portal.test/investor-desk",
        ] {
            assert!(response.body.contains(&format!("<loc>{}</loc>", loc)), "{}", loc);
        }
        assert_eq!(response.body.matches("<url>").count(), 4);
    }

    #[tokio::test]
    async fn test_sitemap_without_registry_lists_investor_desk_only() {
        let fixture = PortalFixture::empty();
        let response = get(&fixture.config, "/sitemap.xml").await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.matches("<url>").count(), 1);
        assert!(response.body.contains("https://portal.test/investor-desk"));
    }
}

#[cfg(test)]
mod request_log_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_request_appends_records() {
        let fixture = PortalFixture::new();

        let first = post_form(
            &fixture.config,
            "/submit-request",
            "company=TCS&quarter=Q1+FY25&type=presentation",
        )
        .await;
        assert_eq!(first.status, StatusCode::OK);
        assert!(first.body.contains("TCS"));

        post_form(
            &fixture.config,
            "/submit-request",
            "company=+INFY+&quarter=Q4+FY24&type=report",
        )
        .await;

        assert_eq!(
            fixture.read_requests(),
            json!([
                {"company": "TCS", "quarter": "Q1 FY25", "type": "presentation"},
                {"company": "INFY", "quarter": "Q4 FY24", "type": "report"}
            ])
        );
    }

    #[tokio::test]
    async fn test_corrupt_request_log_is_reinitialized() {
        let fixture = PortalFixture::new();
        fixture.write_requests("{ this is not a list");

        let response = post_form(
            &fixture.config,
            "/submit-request",
            "company=WIPRO&quarter=Q2&type=other",
        )
        .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            fixture.read_requests(),
            json!([{"company": "WIPRO", "quarter": "Q2", "type": "other"}])
        );
    }

    #[tokio::test]
    async fn test_request_log_failure_still_confirms() {
        let fixture = PortalFixture::new();
        let mut config = fixture.config.clone();
        // A directory cannot be read or replaced as a file
        config.requests_path = fixture.dir.path().to_path_buf();

        let response = post_form(&config, "/submit-request", "company=TCS").await;

        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("Thank you"));
    }
}
