use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn defaults_apply_without_query() {
    let app = common::test_app();
    let (status, list) = common::get_as(&app, "/api/reports", Some("admin")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["filters"]["department"], "all");
    assert_eq!(list["filters"]["period"], "q1-2025");
    assert_eq!(list["reports"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn filters_are_echoed_back() {
    let app = common::test_app();
    let (status, list) = common::get_as(
        &app,
        "/api/reports?department=engineering&period=annual-2025",
        Some("manager"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["filters"]["department"], "engineering");
    assert_eq!(list["filters"]["period"], "annual-2025");
}

#[tokio::test]
async fn unknown_department_is_a_bad_request() {
    let app = common::test_app();
    let (status, response) =
        common::get_as(&app, "/api/reports?department=legal", Some("admin")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Unknown department: legal");
}

#[tokio::test]
async fn employee_is_forbidden_before_filters_are_checked() {
    let app = common::test_app();
    let (status, _) =
        common::get_as(&app, "/api/reports?department=legal", Some("employee")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
