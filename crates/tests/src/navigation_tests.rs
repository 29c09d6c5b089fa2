use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common;

fn paths(response: &Value) -> Vec<String> {
    response
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["path"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn admin_sees_every_entry() {
    let app = common::test_app();
    let (status, response) = common::get_as(&app, "/api/navigation", Some("admin")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        paths(&response),
        vec!["/dashboard", "/reviews", "/reports", "/users", "/settings"]
    );
}

#[tokio::test]
async fn manager_loses_users() {
    let app = common::test_app();
    let (_, response) = common::get_as(&app, "/api/navigation", Some("manager")).await;
    assert_eq!(paths(&response), vec!["/dashboard", "/reviews", "/reports", "/settings"]);
}

#[tokio::test]
async fn missing_or_unknown_role_gets_employee_entries() {
    let app = common::test_app();
    let expected = vec!["/dashboard", "/reviews", "/settings"];

    let (_, response) = common::get_as(&app, "/api/navigation", None).await;
    assert_eq!(paths(&response), expected);

    let (_, response) = common::get_as(&app, "/api/navigation", Some("superuser")).await;
    assert_eq!(paths(&response), expected);
}

#[tokio::test]
async fn entries_carry_icons() {
    let app = common::test_app();
    let (_, response) = common::get_as(&app, "/api/navigation", Some("admin")).await;
    assert_eq!(response[0]["icon"], "home");
    assert_eq!(response[4]["icon"], "cog");
}
