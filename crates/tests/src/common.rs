use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use server::portal::AppState;
use server::role_header::ROLE_HEADER;
use shared_types::PortalSettings;
use tower::ServiceExt;

/// Full API router (REST, health, docs) with zero latency and no failures.
pub fn test_app() -> Router {
    server::openapi::api_router(AppState::default())
}

/// API router whose every portal call fails with 503.
pub fn failing_app() -> Router {
    server::openapi::api_router(AppState::new(PortalSettings {
        simulate_failures: true,
        ..PortalSettings::default()
    }))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

fn request(method: &str, uri: &str, role: Option<&str>, body: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(role) = role {
        builder = builder.header(ROLE_HEADER, role);
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// GET as `role`; `None` sends no role header.
pub async fn get_as(app: &Router, uri: &str, role: Option<&str>) -> (StatusCode, Value) {
    send(app, request("GET", uri, role, None)).await
}

/// POST a JSON body as `role`.
pub async fn post_as(app: &Router, uri: &str, body: &str, role: Option<&str>) -> (StatusCode, Value) {
    send(app, request("POST", uri, role, Some(body))).await
}

/// PUT a JSON body as `role`.
pub async fn put_as(app: &Router, uri: &str, body: &str, role: Option<&str>) -> (StatusCode, Value) {
    send(app, request("PUT", uri, role, Some(body))).await
}

/// Sign in with `email` and return the role string the server assigned.
pub async fn sign_in(app: &Router, email: &str) -> String {
    let body = serde_json::json!({ "email": email, "password": "anything" }).to_string();
    let (status, response) = post_as(app, "/api/session/sign-in", &body, None).await;
    assert_eq!(status, StatusCode::OK, "sign-in failed: {response}");
    response["role"].as_str().unwrap().to_string()
}
