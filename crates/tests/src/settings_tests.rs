use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{AdminSettings, NotificationPreferences, ProfileSettings, Role};

use crate::common;

#[tokio::test]
async fn any_role_saves_a_profile() {
    let app = common::test_app();
    let body = serde_json::to_string(&ProfileSettings::for_role(Role::Employee)).unwrap();
    let (status, response) =
        common::put_as(&app, "/api/settings/profile", &body, Some("employee")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "Your profile has been updated.");
}

#[tokio::test]
async fn profile_needs_a_valid_email() {
    let app = common::test_app();
    let mut profile = ProfileSettings::for_role(Role::Manager);
    profile.email = "not-an-email".into();
    let body = serde_json::to_string(&profile).unwrap();
    let (status, response) = common::put_as(&app, "/api/settings/profile", &body, Some("manager")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["field_errors"]["email"], "Enter a valid email address");
}

#[tokio::test]
async fn notification_preferences_save() {
    let app = common::test_app();
    let body = serde_json::to_string(&NotificationPreferences::default()).unwrap();
    let (status, response) =
        common::put_as(&app, "/api/settings/notifications", &body, Some("employee")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "Your notification preferences have been saved.");
}

#[tokio::test]
async fn only_admins_change_system_settings() {
    let app = common::test_app();
    let body = serde_json::to_string(&AdminSettings::default()).unwrap();

    for role in ["manager", "employee"] {
        let (status, _) = common::put_as(&app, "/api/settings/admin", &body, Some(role)).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "role {role}");
    }

    let (status, response) = common::put_as(&app, "/api/settings/admin", &body, Some("admin")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response["message"],
        "The system settings have been updated successfully."
    );
}

#[tokio::test]
async fn review_window_is_range_checked() {
    let app = common::test_app();
    let settings = AdminSettings {
        review_window_days: 120,
        ..AdminSettings::default()
    };
    let body = serde_json::to_string(&settings).unwrap();
    let (status, response) = common::put_as(&app, "/api/settings/admin", &body, Some("admin")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response["field_errors"]["review_window_days"].is_string());
}
