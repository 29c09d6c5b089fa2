use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use server::portal::AppState;
use server::role_header::ROLE_HEADER;
use tower::ServiceExt;

#[allow(dead_code)]
/// Build a test router with the REST routes and health check.
/// Zero latency and no simulated failures.
pub fn test_app() -> Router {
    app_with_state(AppState::default())
}

#[allow(dead_code)]
pub fn app_with_state(state: AppState) -> Router {
    server::rest::rest_router()
        .route("/health", axum::routing::get(server::health::health_check))
        .with_state(state)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).to_string())
}

fn builder(method: &str, uri: &str, role: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match role {
        Some(role) => builder.header(ROLE_HEADER, role),
        None => builder,
    }
}

#[allow(dead_code)]
/// Send a GET request without a role header.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    get_as(app, uri, None).await
}

#[allow(dead_code)]
/// Send a GET request carrying `X-Portal-Role` when `role` is set.
pub async fn get_as(app: &Router, uri: &str, role: Option<&str>) -> (StatusCode, String) {
    let req = builder("GET", uri, role).body(Body::empty()).unwrap();
    send(app, req).await
}

#[allow(dead_code)]
/// Send a POST request with a JSON body.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    post_json_as(app, uri, body, None).await
}

#[allow(dead_code)]
pub async fn post_json_as(
    app: &Router,
    uri: &str,
    body: &str,
    role: Option<&str>,
) -> (StatusCode, String) {
    let req = builder("POST", uri, role)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

#[allow(dead_code)]
/// Send a PUT request with a JSON body.
pub async fn put_json_as(
    app: &Router,
    uri: &str,
    body: &str,
    role: Option<&str>,
) -> (StatusCode, String) {
    let req = builder("PUT", uri, role)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}
