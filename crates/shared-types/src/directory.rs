use serde::{Deserialize, Serialize};

/// A person listed on the admin-only users page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DirectoryUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub title: String,
}

/// Employees selectable as the subject of a peer or manager review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmployeeOption {
    pub id: String,
    pub name: String,
}
