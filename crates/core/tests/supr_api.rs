mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use serde_json::json;

use common::{MockSupr, EXPECTED_AUTH};
use deliver_core::{
    DeliveryApi, DeliveryProjectRequest, Sensitivity, SuprClient, SuprConfig, SuprError,
};

fn request() -> DeliveryProjectRequest {
    DeliveryProjectRequest::new(
        "P123",
        42,
        Sensitivity::Sensitive,
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    )
}

#[tokio::test]
async fn test_search_returns_sole_match() {
    let supr = MockSupr::start().await;
    supr.add_person(42, "pi@example.org");
    supr.add_person(43, "someone.else@example.org");

    let client = SuprClient::new(&supr.config()).unwrap();
    let pi = client.search_pi_by_email("PI@Example.org").await.unwrap();

    assert_eq!(pi.id, 42);
    let searches = supr.searches();
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].get("email_i").map(String::as_str), Some("PI@Example.org"));
    assert_eq!(supr.auth_headers(), vec![Some(EXPECTED_AUTH.to_string())]);
}

#[tokio::test]
async fn test_search_without_match_fails() {
    let supr = MockSupr::start().await;
    supr.add_person(43, "someone.else@example.org");

    let client = SuprClient::new(&supr.config()).unwrap();
    let result = client.search_pi_by_email("pi@example.org").await;

    assert!(matches!(result, Err(SuprError::NoMatch { .. })));
}

#[tokio::test]
async fn test_search_with_several_matches_fails() {
    let supr = MockSupr::start().await;
    supr.add_person(42, "pi@example.org");
    supr.add_person(44, "Pi@example.org");

    let client = SuprClient::new(&supr.config()).unwrap();
    let result = client.search_pi_by_email("pi@example.org").await;

    assert!(matches!(
        result,
        Err(SuprError::AmbiguousMatch { count: 2, .. })
    ));
}

#[tokio::test]
async fn test_search_error_status_fails() {
    let supr = MockSupr::start().await;
    supr.add_person(42, "pi@example.org");
    supr.set_search_status(StatusCode::INTERNAL_SERVER_ERROR);

    let client = SuprClient::new(&supr.config()).unwrap();
    let result = client.search_pi_by_email("pi@example.org").await;

    match result {
        Err(SuprError::ApiError { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("search unavailable"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_is_reported() {
    let supr = MockSupr::start().await;
    supr.set_search_status(StatusCode::UNAUTHORIZED);

    let client = SuprClient::new(&supr.config()).unwrap();
    let result = client.search_pi_by_email("pi@example.org").await;

    assert!(matches!(result, Err(SuprError::Unauthorized { status: 401 })));
}

#[tokio::test]
async fn test_create_delivery_project() {
    let supr = MockSupr::start().await;

    let client = SuprClient::new(&supr.config()).unwrap();
    let project = client.create_delivery_project(&request()).await.unwrap();

    assert_eq!(project.name, "delivery00123");
    assert_eq!(project.extra.get("id"), Some(&json!(123)));

    let created = supr.created();
    assert_eq!(created.len(), 1);
    assert_eq!(
        created[0],
        json!({
            "ngi_project_name": "P123",
            "title": "DELIVERY_P123_2024-01-31",
            "pi_id": 42,
            "start_date": "2024-01-31",
            "end_date": "2024-04-30",
            "continuation_name": "",
            "api_opaque_data": "",
            "ngi_ready": false,
            "ngi_delivery_status": "",
            "ngi_sensitive_data": true
        })
    );
    assert_eq!(supr.auth_headers(), vec![Some(EXPECTED_AUTH.to_string())]);
}

#[tokio::test]
async fn test_create_error_status_fails() {
    let supr = MockSupr::start().await;
    supr.set_create_status(StatusCode::BAD_REQUEST);

    let client = SuprClient::new(&supr.config()).unwrap();
    let result = client.create_delivery_project(&request()).await;

    assert!(matches!(
        result,
        Err(SuprError::ApiError { status: 400, .. })
    ));
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let supr = MockSupr::start().await;
    supr.add_person(42, "pi@example.org");

    let config = SuprConfig {
        base_url: format!("{}/", supr.base_url),
        ..supr.config()
    };
    let client = SuprClient::new(&config).unwrap();

    assert_eq!(client.search_pi_by_email("pi@example.org").await.unwrap().id, 42);
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let config = SuprConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        api_user: "deliver".to_string(),
        api_key: "secret".to_string(),
        timeout_secs: Some(5),
    };
    let client = SuprClient::new(&config).unwrap();

    let result = client.search_pi_by_email("pi@example.org").await;
    assert!(matches!(result, Err(SuprError::HttpError(_))));
}
