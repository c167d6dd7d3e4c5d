//! Integration tests for the helmet endpoints.

mod helpers;

use axum::http::{StatusCode, header};
use serde_json::json;

#[tokio::test]
async fn test_create_returns_location_and_formatted_year() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/v1/mhelmets",
            Some(json!({
                "name": "SpeedMaster X1",
                "year": 2022,
                "material": "Carbon fiber",
                "ventilation": true,
                "protection": "ECE 22.06",
                "weight": 1.35,
                "sun_protection": true,
                "design": "Full face",
                "lining_material": "Merino",
                "fastening": "Double D-ring",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.headers.get(header::LOCATION).unwrap(),
        "/v1/mhelmets/1"
    );

    let helmet = &response.body["helmet"];
    assert_eq!(helmet["id"], 1);
    assert_eq!(helmet["year"], "2022 year");
    assert_eq!(helmet["ventilation"], true);
    assert_eq!(helmet["fastening"], "Double D-ring");
    assert!(helmet.get("created_at").is_none());
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_show_existing_helmet() {
    let app = helpers::TestApp::new();
    let id = app.create_helmet("RoadRunner", 2019).await;

    let response = app.request("GET", &format!("/v1/mhelmets/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["helmet"]["name"], "RoadRunner");
    assert_eq!(response.body["helmet"]["year"], "2019 year");
}

#[tokio::test]
async fn test_show_bad_ids_are_not_found() {
    let app = helpers::TestApp::new();
    app.create_helmet("RoadRunner", 2019).await;

    for path in ["/v1/mhelmets/abc", "/v1/mhelmets/0", "/v1/mhelmets/-1", "/v1/mhelmets/99"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "path {path}");
        assert_eq!(
            response.body["message"],
            "the requested resource could not be found"
        );
    }
}

#[tokio::test]
async fn test_create_invalid_reports_every_field() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/v1/mhelmets", Some(json!({ "year": 1700 })))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.body["details"]["name"][0], "must be provided");
    assert_eq!(
        response.body["details"]["year"][0],
        "must be greater than 1888"
    );
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_create_unknown_field_is_bad_request() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/v1/mhelmets",
            Some(json!({ "name": "SpeedMaster X1", "year": 2022, "colour": "red" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_malformed_json_is_bad_request() {
    let app = helpers::TestApp::new();

    let response = app
        .raw_request("POST", "/v1/mhelmets", "{\"name\": ".to_string())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_keeps_unset_fields() {
    let app = helpers::TestApp::new();
    let id = app.create_helmet("SpeedMaster X1", 2022).await;

    let response = app
        .request(
            "PATCH",
            &format!("/v1/mhelmets/{id}"),
            Some(json!({ "weight": 1.5, "sun_protection": true })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let helmet = &response.body["helmet"];
    assert_eq!(helmet["weight"], 1.5);
    assert_eq!(helmet["sun_protection"], true);
    assert_eq!(helmet["name"], "SpeedMaster X1");
    assert_eq!(helmet["material"], "Carbon fiber");
}

#[tokio::test]
async fn test_patch_invalid_leaves_record_unchanged() {
    let app = helpers::TestApp::new();
    let id = app.create_helmet("SpeedMaster X1", 2022).await;

    let response = app
        .request(
            "PATCH",
            &format!("/v1/mhelmets/{id}"),
            Some(json!({ "name": "" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);

    let shown = app.request("GET", &format!("/v1/mhelmets/{id}"), None).await;
    assert_eq!(shown.body["helmet"]["name"], "SpeedMaster X1");
}

#[tokio::test]
async fn test_put_replaces_every_field() {
    let app = helpers::TestApp::new();
    let id = app.create_helmet("SpeedMaster X1", 2022).await;

    let response = app
        .request(
            "PUT",
            &format!("/v1/mhelmets/{id}"),
            Some(json!({ "name": "RoadRunner", "year": 2019 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let helmet = &response.body["helmet"];
    assert_eq!(helmet["id"], id);
    assert_eq!(helmet["name"], "RoadRunner");
    assert_eq!(helmet["year"], "2019 year");
    assert_eq!(helmet["material"], "");
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .request("PATCH", "/v1/mhelmets/7", Some(json!({ "weight": 1.0 })))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_show_is_not_found() {
    let app = helpers::TestApp::new();
    let id = app.create_helmet("SpeedMaster X1", 2022).await;

    let response = app
        .request("DELETE", &format!("/v1/mhelmets/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "motorcycle helmet successfully deleted"
    );

    let response = app.request("GET", &format!("/v1/mhelmets/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/v1/mhelmets/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_filters_by_name_substring() {
    let app = helpers::TestApp::new();
    app.create_helmet("SpeedMaster X1", 2022).await;
    app.create_helmet("RoadRunner", 2019).await;

    let response = app.request("GET", "/v1/mhelmets?name=speed", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let helmets = response.body["helmets"].as_array().unwrap();
    assert_eq!(helmets.len(), 1);
    assert_eq!(helmets[0]["name"], "SpeedMaster X1");

    let metadata = &response.body["metadata"];
    assert_eq!(metadata["current_page"], 1);
    assert_eq!(metadata["page_size"], 20);
    assert_eq!(metadata["first_page"], 1);
    assert_eq!(metadata["last_page"], 1);
    assert_eq!(metadata["total_records"], 1);
}

#[tokio::test]
async fn test_list_sorts_and_paginates() {
    let app = helpers::TestApp::new();
    app.create_helmet("SpeedMaster X1", 2022).await;
    app.create_helmet("RoadRunner", 2019).await;
    app.create_helmet("Trail Speedster", 2021).await;

    let response = app
        .request("GET", "/v1/mhelmets?sort=-year&page=2&page_size=2", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let helmets = response.body["helmets"].as_array().unwrap();
    assert_eq!(helmets.len(), 1);
    assert_eq!(helmets[0]["name"], "RoadRunner");
    assert_eq!(response.body["metadata"]["last_page"], 2);
    assert_eq!(response.body["metadata"]["total_records"], 3);
}

#[tokio::test]
async fn test_list_empty_has_empty_metadata() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/v1/mhelmets?name=nothing", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["helmets"], json!([]));
    assert_eq!(response.body["metadata"], json!({}));
}

#[tokio::test]
async fn test_list_page_past_end_has_empty_metadata() {
    let app = helpers::TestApp::new();
    app.create_helmet("SpeedMaster X1", 2022).await;
    app.create_helmet("RoadRunner", 2019).await;
    app.create_helmet("Trail Speedster", 2021).await;

    let response = app
        .request("GET", "/v1/mhelmets?page=5&page_size=2", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["helmets"], json!([]));
    assert_eq!(response.body["metadata"], json!({}));
}

#[tokio::test]
async fn test_list_rejects_unlisted_sort() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/v1/mhelmets?sort=created_at", None).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["details"]["sort"][0], "invalid sort value");
}

#[tokio::test]
async fn test_list_rejects_bad_pagination() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/v1/mhelmets?page=abc&page_size=500", None)
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["details"]["page"][0], "must be an integer value");
}

#[tokio::test]
async fn test_unsupported_method_is_405() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/v1/mhelmets/1", None).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["error"], "METHOD_NOT_ALLOWED");
}
