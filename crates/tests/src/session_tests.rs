use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn each_demo_email_signs_in_with_its_role() {
    let app = common::test_app();
    assert_eq!(common::sign_in(&app, "admin@example.com").await, "admin");
    assert_eq!(common::sign_in(&app, "manager@example.com").await, "manager");
    assert_eq!(common::sign_in(&app, "employee@example.com").await, "employee");
}

#[tokio::test]
async fn unknown_email_signs_in_as_employee() {
    let app = common::test_app();
    assert_eq!(common::sign_in(&app, "someone@else.org").await, "employee");
}

#[tokio::test]
async fn session_response_carries_dashboard_and_navigation() {
    let app = common::test_app();
    let body = r#"{"email":"manager@example.com","password":"x"}"#;
    let (status, response) = common::post_as(&app, "/api/session/sign-in", body, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["dashboard"], "manager");
    assert_eq!(response["email"], "manager@example.com");

    let titles: Vec<&str> = response["navigation"]
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Dashboard", "Reviews", "Reports", "Settings"]);
}

#[tokio::test]
async fn sign_up_rejects_mismatched_passwords() {
    let app = common::test_app();
    let body = r#"{"name":"Pat Lee","email":"pat@example.com","password":"Str0ng!pass","confirm_password":"Str0ng!pasS"}"#;
    let (status, response) = common::post_as(&app, "/api/session/sign-up", body, None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["field_errors"]["confirm_password"], "Passwords don't match");
}

#[tokio::test]
async fn sign_up_then_sign_in() {
    let app = common::test_app();
    let body = r#"{"name":"Pat Lee","email":"pat@example.com","password":"Str0ng!pass","confirm_password":"Str0ng!pass"}"#;
    let (status, response) = common::post_as(&app, "/api/session/sign-up", body, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "Account created successfully!");

    assert_eq!(common::sign_in(&app, "pat@example.com").await, "employee");
}
