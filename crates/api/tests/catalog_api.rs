//! Integration tests for the `/catalog` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_seeded_entries_and_categories() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/catalog").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert!(!data.is_empty());

    // Seed order: the modern sofa leads the catalog.
    assert_eq!(data[0]["model_id"], "modern_sofa_01");
    assert_eq!(data[0]["category"], "seating");
    assert_eq!(data[0]["dimensions"]["width"], 2.0);

    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 7);
    assert!(categories.contains(&serde_json::json!("kitchen")));
}

#[tokio::test]
async fn list_filters_by_category() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/catalog?category=tables").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert!(!data.is_empty());
    assert!(data.iter().all(|e| e["category"] == "tables"));
}

#[tokio::test]
async fn list_rejects_unknown_category() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/catalog?category=garage").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_matches_case_insensitively_and_reports_count() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/catalog/search?q=SOFA").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert!(!data.is_empty());
    assert_eq!(json["count"], data.len());

    for entry in data {
        let name = entry["name"].as_str().unwrap().to_lowercase();
        let description = entry["description"].as_str().unwrap().to_lowercase();
        assert!(
            name.contains("sofa") || description.contains("sofa"),
            "unexpected hit: {entry}"
        );
    }
}

#[tokio::test]
async fn search_without_query_is_a_validation_error() {
    let app = common::build_test_app();

    let missing = get(app.clone(), "/api/v1/catalog/search").await;
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

    let empty = get(app, "/api/v1/catalog/search?q=").await;
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
    let json = body_json(empty).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn search_with_no_hits_returns_empty_list() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/catalog/search?q=submarine").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["count"], 0);
}

// ---------------------------------------------------------------------------
// Single entry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_by_id_returns_entry_with_usage_count() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/catalog/mirror_01").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["model_id"], "mirror_01");
    assert_eq!(json["name"], "Wall Mirror");
    assert_eq!(json["usage_count"], 0);
}

#[tokio::test]
async fn get_unknown_id_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/catalog/hovercraft_01").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
