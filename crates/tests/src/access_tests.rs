use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn manager_is_allowed_reports_but_not_users() {
    let app = common::test_app();

    let (status, decision) = common::get_as(&app, "/api/access/reports", Some("manager")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decision["access"], "allowed");
    assert_eq!(decision["path"], "/reports");

    let (_, decision) = common::get_as(&app, "/api/access/users", Some("manager")).await;
    assert_eq!(decision["access"], "denied");
    assert_eq!(decision["permitted"], serde_json::json!(["admin"]));
}

#[tokio::test]
async fn review_create_is_for_authors_only() {
    let app = common::test_app();
    for (role, expected) in [("admin", "allowed"), ("manager", "allowed"), ("employee", "denied")] {
        let (_, decision) = common::get_as(&app, "/api/access/review-create", Some(role)).await;
        assert_eq!(decision["access"], expected, "role {role}");
    }
}

#[tokio::test]
async fn unknown_page_is_not_found() {
    let app = common::test_app();
    let (status, response) = common::get_as(&app, "/api/access/payroll", Some("admin")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["message"], "Unknown page: payroll");
}

#[tokio::test]
async fn guarded_endpoints_follow_the_same_table() {
    let app = common::test_app();

    let role = common::sign_in(&app, "manager@example.com").await;
    let (status, response) = common::get_as(&app, "/api/users", Some(&role)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(response["message"], "You do not have permission to view users.");

    let (status, _) = common::get_as(&app, "/api/reports", Some(&role)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = common::get_as(&app, "/api/reports", Some("employee")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn capitalised_role_header_is_not_admin() {
    let app = common::test_app();
    for raw in ["ADMIN", "Admin"] {
        let (status, _) = common::get_as(&app, "/api/users", Some(raw)).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "header {raw:?}");
    }
}
