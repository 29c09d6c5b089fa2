use axum::{extract::FromRequestParts, http::request::Parts};
use shared_types::{AppError, Role};

pub const ROLE_HEADER: &str = "x-portal-role";

/// Caller's role from the `X-Portal-Role` header.
///
/// Missing or unrecognised values read as `Employee`, the same rule the
/// browser store applies to its `userRole` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalRole(pub Role);

impl PortalRole {
    fn from_parts(parts: &Parts) -> Self {
        let role = parts
            .headers
            .get(ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(Role::from_str_or_default)
            .unwrap_or_default();
        PortalRole(role)
    }
}

impl<S> FromRequestParts<S> for PortalRole
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn role_for(header: Option<&str>) -> Role {
        let mut builder = Request::builder().uri("/api/navigation");
        if let Some(value) = header {
            builder = builder.header("X-Portal-Role", value);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        PortalRole::from_parts(&parts).0
    }

    #[test]
    fn header_values_must_be_exact() {
        assert_eq!(role_for(Some("admin")), Role::Admin);
        assert_eq!(role_for(Some("manager")), Role::Manager);
        assert_eq!(role_for(Some(" Manager ")), Role::Employee);
        assert_eq!(role_for(Some("ADMIN")), Role::Employee);
    }

    #[test]
    fn missing_or_unknown_header_is_employee() {
        assert_eq!(role_for(None), Role::Employee);
        assert_eq!(role_for(Some("superuser")), Role::Employee);
    }
}
