use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn dashboard_view_follows_role() {
    let app = common::test_app();
    for role in ["admin", "manager", "employee"] {
        let (status, snapshot) = common::get_as(&app, "/api/dashboard", Some(role)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(snapshot["view"], role);
    }
}

#[tokio::test]
async fn missing_role_header_gets_employee_dashboard() {
    let app = common::test_app();
    let (status, snapshot) = common::get_as(&app, "/api/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snapshot["view"], "employee");
    assert_eq!(snapshot["skills"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn admin_dashboard_lists_departments() {
    let app = common::test_app();
    let (_, snapshot) = common::get_as(&app, "/api/dashboard", Some("admin")).await;
    let names: Vec<&str> = snapshot["departments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Engineering", "Marketing", "Sales", "HR", "Finance"]);
}

#[tokio::test]
async fn manager_team_links_to_employee_reviews() {
    let app = common::test_app();
    let (_, snapshot) = common::get_as(&app, "/api/dashboard", Some("manager")).await;
    let member = &snapshot["team"][2];
    assert_eq!(member["name"], "Michael Brown");

    let uri = format!("/api/reviews?employee={}", member["id"].as_str().unwrap());
    let (status, reviews) = common::get_as(&app, &uri, Some("manager")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reviews[0]["subject"], "Michael Brown - Q1 Review");
}
