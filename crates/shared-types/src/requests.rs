use crate::access::{Access, Page};
use crate::navigation::NavLink;
use crate::password::PasswordStrength;
use crate::role::Role;
use crate::views::DashboardView;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Request DTO for the demo sign-in. Any password is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SignInRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Request DTO for creating an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SignUpRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Who the caller is after sign-in, and what they may see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionResponse {
    pub role: Role,
    pub display_name: String,
    pub email: String,
    pub dashboard: DashboardView,
    pub navigation: Vec<NavLink>,
}

impl SessionResponse {
    pub fn for_role(role: Role) -> Self {
        Self {
            role,
            display_name: role.display_name().to_string(),
            email: role.demo_email().to_string(),
            dashboard: DashboardView::for_role(role),
            navigation: crate::navigation::nav_for(role)
                .into_iter()
                .map(NavLink::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Guard decision for one page and role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AccessDecision {
    pub page: Page,
    pub path: String,
    pub role: Role,
    pub access: Access,
    pub permitted: Vec<Role>,
}

impl AccessDecision {
    pub fn evaluate(page: Page, role: Role) -> Self {
        Self {
            page,
            path: page.path().to_string(),
            role,
            access: page.access_for(role),
            permitted: page.permitted_roles().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PasswordStrengthRequest {
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PasswordStrengthResponse {
    #[serde(flatten)]
    pub strength: PasswordStrength,
    pub label: String,
    pub acceptable: bool,
}

impl From<PasswordStrength> for PasswordStrengthResponse {
    fn from(strength: PasswordStrength) -> Self {
        Self {
            label: strength.level.label().to_string(),
            acceptable: strength.meets_minimum(),
            strength,
        }
    }
}
