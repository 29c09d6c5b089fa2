use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

fn draft(review_type: &str, subject: &str, employee_id: Option<&str>) -> String {
    serde_json::json!({
        "review_type": review_type,
        "subject": subject,
        "employee_id": employee_id,
        "due_date": "2025-04-30",
        "ratings": { "technical_skills": 4, "communication": 3 },
        "send_email": true,
        "send_reminders": false,
    })
    .to_string()
}

#[tokio::test]
async fn everyone_can_list_reviews() {
    let app = common::test_app();
    for role in ["admin", "manager", "employee"] {
        let (status, reviews) = common::get_as(&app, "/api/reviews", Some(role)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reviews.as_array().unwrap().len(), 6);
    }
}

#[tokio::test]
async fn employee_without_reviews_gets_empty_list() {
    let app = common::test_app();
    let (status, reviews) = common::get_as(&app, "/api/reviews?employee=4", Some("manager")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(reviews.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn manager_creates_a_peer_review() {
    let app = common::test_app();
    let role = common::sign_in(&app, "manager@example.com").await;

    let (status, employees) = common::get_as(&app, "/api/reviews/employees", Some(&role)).await;
    assert_eq!(status, StatusCode::OK);
    let employee_id = employees[1]["id"].as_str().unwrap().to_string();

    let body = draft("peer", "Q2 Peer Review", Some(&employee_id));
    let (status, review) = common::post_as(&app, "/api/reviews", &body, Some(&role)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["status"], "pending");
    assert_eq!(review["review_type"], "peer");
    assert_eq!(review["employee_id"], employee_id.as_str());
}

#[tokio::test]
async fn peer_review_needs_an_employee() {
    let app = common::test_app();
    let body = draft("peer", "Q2 Peer Review", None);
    let (status, response) = common::post_as(&app, "/api/reviews", &body, Some("admin")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response["field_errors"]["employee_id"].is_string());
}

#[tokio::test]
async fn short_subject_is_rejected() {
    let app = common::test_app();
    let body = draft("self", "Q", None);
    let (status, response) = common::post_as(&app, "/api/reviews", &body, Some("admin")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response["field_errors"]["subject"],
        "Subject must be at least 2 characters."
    );
}

#[tokio::test]
async fn employee_cannot_create_reviews() {
    let app = common::test_app();
    let body = draft("self", "Annual Self Review", None);
    let (status, _) = common::post_as(&app, "/api/reviews", &body, Some("employee")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = common::get_as(&app, "/api/reviews/employees", Some("employee")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
