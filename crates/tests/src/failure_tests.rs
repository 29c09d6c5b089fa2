use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn simulated_failure_is_service_unavailable() {
    let app = common::failing_app();
    let body = r#"{"email":"admin@example.com","password":"x"}"#;
    let (status, response) = common::post_as(&app, "/api/session/sign-in", body, None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response["kind"], "Unavailable");
}

#[tokio::test]
async fn access_checks_run_before_the_simulated_call() {
    let app = common::failing_app();
    let (status, _) = common::get_as(&app, "/api/users", Some("employee")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = common::get_as(&app, "/api/users", Some("admin")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn static_lookups_still_answer() {
    let app = common::failing_app();
    let (status, _) = common::get_as(&app, "/api/navigation", Some("admin")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::get_as(&app, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}
