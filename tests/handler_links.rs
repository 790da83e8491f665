mod common;

use axum::http::StatusCode;
use lnk::api::dto::links::{LinkIdResponse, LinkListResponse, LinkResponse};
use serde_json::json;

#[tokio::test]
async fn test_create_link_generated_slug() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<LinkIdResponse>();
    assert!(!body.link.is_empty());

    let link = state.registry.get_link(&body.link).unwrap();
    assert_eq!(link.target, "https://example.com");
    assert_eq!(link.hits, 0);
}

#[tokio::test]
async fn test_create_link_custom_slug() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com", "slug": "my-link" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["link"], "my-link");
    assert_eq!(state.registry.get_target("my-link").unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_create_link_empty_slug_generates() {
    let state = common::create_test_state_with(common::FixedSlugGenerator("fixed1"));
    let server = common::create_test_server(state);

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com", "slug": "" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<LinkIdResponse>().link, "fixed1");
}

#[tokio::test]
async fn test_create_link_duplicate_slug_conflict() {
    let state = common::create_test_state();
    common::create_test_link(&state, "taken", "https://first.example");
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://second.example", "slug": "taken" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");

    assert_eq!(
        state.registry.get_target("taken").unwrap(),
        "https://first.example"
    );
}

#[tokio::test]
async fn test_create_link_generation_exhausted() {
    let state = common::create_test_state_with(common::FixedSlugGenerator("test"));
    let server = common::create_test_server(state);

    server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_create_link_validation() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "" }))
        .await;
    response.assert_status_bad_request();

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com", "slug": "a/b" }))
        .await;
    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    assert!(state.registry.is_empty());
}

#[tokio::test]
async fn test_create_link_rejects_header_injection() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "https://example.com/\nSet-Cookie: x=1", "slug": "evil" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(state.registry.is_empty());

    server.get("/evil").await.assert_status_not_found();
}

#[tokio::test]
async fn test_create_link_rejects_non_url_target() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server
        .post("/api/links")
        .json(&json!({ "target": "not a url" }))
        .await;

    response.assert_status_bad_request();
    assert!(state.registry.is_empty());
}

#[tokio::test]
async fn test_get_link() {
    let state = common::create_test_state();
    common::create_test_link(&state, "stats", "https://example.com");
    state.registry.register_hit("stats");
    let server = common::create_test_server(state);

    let response = server.get("/api/links/stats").await;

    response.assert_status_ok();
    let link = response.json::<LinkResponse>();
    assert_eq!(link.slug, "stats");
    assert_eq!(link.target, "https://example.com");
    assert_eq!(link.hits, 1);
    assert_eq!(link.histogram.values().sum::<u64>(), 1);
}

#[tokio::test]
async fn test_get_link_not_found() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/api/links/missing").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["slug"], "missing");
}

#[tokio::test]
async fn test_list_links() {
    let state = common::create_test_state();
    let server = common::create_test_server(state.clone());

    let response = server.get("/api/links").await;
    response.assert_status_ok();
    assert!(response.json::<LinkListResponse>().links.is_empty());

    common::create_test_link(&state, "one", "https://one.example");
    common::create_test_link(&state, "two", "https://two.example");

    let response = server.get("/api/links").await;
    let mut slugs: Vec<String> = response
        .json::<LinkListResponse>()
        .links
        .into_iter()
        .map(|l| l.slug)
        .collect();
    slugs.sort();
    assert_eq!(slugs, vec!["one", "two"]);
}

#[tokio::test]
async fn test_delete_link() {
    let state = common::create_test_state();
    common::create_test_link(&state, "bye", "https://example.com");
    let server = common::create_test_server(state.clone());

    let response = server.delete("/api/links/bye").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(state.registry.get_link("bye").is_err());

    server.get("/api/links/bye").await.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_unknown_link_is_ok() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.delete("/api/links/never-existed").await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_roundtrip_over_http() {
    let server = common::create_test_server(common::create_test_state());

    let slug = server
        .post("/api/links")
        .json(&json!({ "target": "https://google.com" }))
        .await
        .json::<LinkIdResponse>()
        .link;

    let link = server
        .get(&format!("/api/links/{slug}"))
        .await
        .json::<LinkResponse>();
    assert_eq!(link.target, "https://google.com");

    server
        .delete(&format!("/api/links/{slug}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/links/{slug}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_wrong_method_on_api_route() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .put("/api/links")
        .json(&json!({ "target": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "method_not_allowed");
    assert_eq!(json["error"]["details"]["method"], "PUT");

    let response = server.post("/api/links/anything").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_api_path_never_redirects() {
    let state = common::create_test_state();
    common::create_test_link(&state, "unknown", "https://example.com");
    let server = common::create_test_server(state.clone());

    let response = server.get("/api/unknown").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["path"], "/api/unknown");
    assert_eq!(state.registry.get_link("unknown").unwrap().hits, 0);
}
