//! End-to-end tests over the in-memory router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use kiruna_api::{create_router, AppState};
use kiruna_auth::{AuthConfig, TokenCodec};
use kiruna_core::models::UserId;
use kiruna_store::cdn::StaticCdn;
use kiruna_store::memory::{
    MemoryCoordinateStore, MemoryDocumentStore, MemoryMediaStore, MemoryUserStore,
};
use serde_json::{json, Value};
use tower::ServiceExt;

const TEST_SECRET: &str = "test-secret";

fn app() -> Router {
    app_with_cdn().0
}

/// Build the router plus a handle onto its CDN adapter; clones share blobs.
fn app_with_cdn() -> (Router, StaticCdn) {
    let cdn = StaticCdn::new("https://cdn.kiruna.example");
    let state = Arc::new(AppState::new(
        Arc::new(MemoryCoordinateStore::new()),
        Arc::new(MemoryDocumentStore::new()),
        Arc::new(MemoryMediaStore::new()),
        Arc::new(MemoryUserStore::new()),
        Arc::new(cdn.clone()),
        AuthConfig::new(TEST_SECRET, 3600),
    ));
    (create_router(state), cdn)
}

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Register a user and log in, returning the auth cookie.
async fn login_as(router: &Router, email: &str, role: &str) -> String {
    let (status, _) = send(
        router,
        Method::POST,
        "/api/v1/users",
        None,
        Some(json!({
            "name": "Hilda",
            "surname": "Lindqvist",
            "email": email,
            "password": "correct horse",
            "role": role,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/sessions")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"email": email, "password": "correct horse"}).to_string(),
        ))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn health_reports_ok() {
    let router = app();
    let (status, body) = send(&router, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn created_point_round_trips_through_the_store() {
    let router = app();
    let cookie = login_as(&router, "planner@kiruna.se", "PLANNER").await;

    let (status, created) = send(
        &router,
        Method::POST,
        "/api/v1/coordinates",
        Some(&cookie),
        Some(json!({
            "type": "Point",
            "coordinates": [67.85572, 20.22513],
            "name": "Kiruna Center",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_str().unwrap();
    let (status, fetched) =
        send(&router, Method::GET, &format!("/api/v1/coordinates/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["type"], "Point");
    assert_eq!(fetched["coordinates"], json!([67.85572, 20.22513]));
    assert_eq!(fetched["name"], "Kiruna Center");
}

#[tokio::test]
async fn out_of_range_point_is_rejected_before_persistence() {
    let router = app();
    let cookie = login_as(&router, "planner@kiruna.se", "PLANNER").await;

    let (status, body) = send(
        &router,
        Method::POST,
        "/api/v1/coordinates",
        Some(&cookie),
        Some(json!({"type": "Point", "coordinates": [200, 20], "name": "Bad"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["kind"], "InvalidCoordinateRange");

    // nothing was written
    let (_, all) = send(&router, Method::GET, "/api/v1/coordinates", None, None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn absent_coordinate_is_a_404_not_a_500() {
    let router = app();
    let (status, body) = send(
        &router,
        Method::GET,
        &format!("/api/v1/coordinates/{}", uuid::Uuid::new_v4()),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "position not found");
}

#[tokio::test]
async fn coordinate_creation_requires_authentication() {
    let router = app();
    let (status, _) = send(
        &router,
        Method::POST,
        "/api/v1/coordinates",
        None,
        Some(json!({"type": "Point", "coordinates": [0, 0], "name": "Nowhere"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn visitor_role_is_forbidden_from_mutations() {
    let router = app();
    let cookie = login_as(&router, "visitor@kiruna.se", "VISITOR").await;

    let (status, _) = send(
        &router,
        Method::POST,
        "/api/v1/coordinates",
        Some(&cookie),
        Some(json!({"type": "Point", "coordinates": [0, 0], "name": "Nowhere"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn tampered_token_is_a_400() {
    let router = app();
    let cookie = login_as(&router, "planner@kiruna.se", "PLANNER").await;

    let (status, _) = send(
        &router,
        Method::POST,
        "/api/v1/coordinates",
        Some(&format!("{cookie}tampered")),
        Some(json!({"type": "Point", "coordinates": [0, 0], "name": "Nowhere"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn valid_token_for_unknown_user_is_a_401() {
    let router = app();
    // signed with the server's secret, but the subject was never registered
    let codec = TokenCodec::new(&AuthConfig::new(TEST_SECRET, 3600));
    let token = codec.issue(UserId::new()).unwrap();

    let (status, _) = send(
        &router,
        Method::POST,
        "/api/v1/coordinates",
        Some(&format!("kiruna_token={token}")),
        Some(json!({"type": "Point", "coordinates": [0, 0], "name": "Nowhere"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let router = app();
    let body = json!({
        "name": "Hilda",
        "surname": "Lindqvist",
        "email": "hilda@kiruna.se",
        "password": "correct horse",
        "role": "RESIDENT",
    });

    let (status, _) = send(&router, Method::POST, "/api/v1/users", None, Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&router, Method::POST, "/api/v1/users", None, Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn graph_over_connected_documents_emits_one_edge_per_pair() {
    let router = app();
    let cookie = login_as(&router, "planner@kiruna.se", "PLANNER").await;

    let (_, empty) = send(&router, Method::GET, "/api/v1/graph", None, None).await;
    assert_eq!(empty, json!({"nodes": [], "edges": []}));

    let (_, coordinate) = send(
        &router,
        Method::POST,
        "/api/v1/coordinates",
        Some(&cookie),
        Some(json!({"type": "Point", "coordinates": [67.85, 20.22], "name": "Center"})),
    )
    .await;
    let coordinate_id = coordinate["id"].as_str().unwrap().to_string();

    let mut ids = Vec::new();
    for title in ["Development plan", "Deformation forecast", "Unlinked"] {
        let (status, doc) = send(
            &router,
            Method::POST,
            "/api/v1/documents",
            Some(&cookie),
            Some(json!({
                "title": title,
                "stakeholders": ["LKAB"],
                "scale": "1:8000",
                "type": "Prescriptive document",
                "language": "Swedish",
                "pages": 12,
                "coordinate": coordinate_id,
                "summary": "summary",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(doc["id"].clone());
    }

    let (status, _) = send(
        &router,
        Method::POST,
        &format!("/api/v1/documents/{}/connections", ids[0].as_str().unwrap()),
        Some(&cookie),
        Some(json!({"to": ids[1]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, graph) = send(&router, Method::GET, "/api/v1/graph", None, None).await;
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 3);
    // symmetric storage still yields a single deduplicated edge
    assert_eq!(graph["edges"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn user_listing_admits_planner_and_developer_only() {
    let router = app();

    let developer = login_as(&router, "developer@kiruna.se", "DEVELOPER").await;
    let (status, body) = send(&router, Method::GET, "/api/v1/users", Some(&developer), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let resident = login_as(&router, "resident@kiruna.se", "RESIDENT").await;
    let (status, _) = send(&router, Method::GET, "/api/v1/users", Some(&resident), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn media_upload_issues_url_and_update_is_owner_only() {
    let (router, cdn) = app_with_cdn();
    let owner = login_as(&router, "owner@kiruna.se", "RESIDENT").await;

    let boundary = "kiruna-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"plan.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n\
         %PDF-1.4 test content\r\n\
         --{boundary}--\r\n"
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/media")
        .header(COOKIE, &owner)
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
        .body(Body::from(body))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let media: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(media["filename"], "plan.pdf");
    assert_eq!(media["mimetype"], "application/pdf");
    let url = media["url"].as_str().unwrap();
    assert!(url.starts_with("https://cdn.kiruna.example/"));
    // the uploaded bytes were handed to the delivery port, not dropped
    assert_eq!(cdn.content(url).as_deref(), Some(b"%PDF-1.4 test content".as_ref()));
    let media_id = media["id"].as_str().unwrap().to_string();

    // the owner can rename
    let (status, updated) = send(
        &router,
        Method::PUT,
        &format!("/api/v1/media/{media_id}"),
        Some(&owner),
        Some(json!({"filename": "plan-v2.pdf"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["filename"], "plan-v2.pdf");

    // anyone else cannot
    let other = login_as(&router, "other@kiruna.se", "PLANNER").await;
    let (status, _) = send(
        &router,
        Method::PUT,
        &format!("/api/v1/media/{media_id}"),
        Some(&other),
        Some(json!({"filename": "stolen.pdf"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn login_response_never_leaks_the_password_hash() {
    let router = app();
    let _ = login_as(&router, "hilda@kiruna.se", "PLANNER").await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/sessions")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"email": "hilda@kiruna.se", "password": "correct horse"}).to_string(),
        ))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let user: Value = serde_json::from_slice(&bytes).unwrap();

    assert!(user.get("password_hash").is_none());
    assert!(user.get("password").is_none());

    // wrong password is a 401 with the same message as an unknown email
    let (status, body) = send(
        &router,
        Method::POST,
        "/api/v1/sessions",
        None,
        Some(json!({"email": "hilda@kiruna.se", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status_unknown, body_unknown) = send(
        &router,
        Method::POST,
        "/api/v1/sessions",
        None,
        Some(json!({"email": "nobody@kiruna.se", "password": "wrong"})),
    )
    .await;
    assert_eq!(status_unknown, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], body_unknown["error"]);
}
