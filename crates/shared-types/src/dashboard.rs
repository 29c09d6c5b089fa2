use crate::activity::Activity;
use crate::review::ReviewStatus;
use serde::{Deserialize, Serialize};

/// Whole-number percentage, `0` when `total` is zero.
pub fn percent(part: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round().min(100.0) as u8
}

/// Review counts for a cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReviewStats {
    pub total: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub pending: u32,
    pub completion_rate: u8,
}

impl ReviewStats {
    pub fn share_of_total(&self, count: u32) -> u8 {
        percent(count, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DepartmentProgress {
    pub name: String,
    pub completed: u32,
    pub total: u32,
}

impl DepartmentProgress {
    pub fn percent(&self) -> u8 {
        percent(self.completed, self.total)
    }

    pub fn pending(&self) -> u32 {
        self.total.saturating_sub(self.completed)
    }
}

/// One point of the completion trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TrendPoint {
    pub label: String,
    pub completed: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub title: String,
    pub review_status: ReviewStatus,
}

impl TeamMember {
    /// Link target of the member's "View Reviews" button.
    pub fn reviews_href(&self) -> String {
        format!("/reviews?employee={}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Deadline {
    pub title: String,
    pub due_in_days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReviewMilestone {
    pub status: ReviewStatus,
    pub due: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PeerReviewProgress {
    pub completed: u32,
    pub total: u32,
    pub due: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SkillRating {
    pub name: String,
    pub rating: u32,
    pub max_rating: u32,
}

impl SkillRating {
    pub fn percent(&self) -> u8 {
        percent(self.rating, self.max_rating)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DevelopmentGoal {
    pub title: String,
    pub description: String,
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminDashboard {
    pub stats: ReviewStats,
    pub departments: Vec<DepartmentProgress>,
    pub trend: Vec<TrendPoint>,
    pub activity: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ManagerDashboard {
    pub team: Vec<TeamMember>,
    pub stats: ReviewStats,
    pub deadlines: Vec<Deadline>,
    pub activity: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EmployeeDashboard {
    pub self_review: ReviewMilestone,
    pub peer_reviews: PeerReviewProgress,
    pub manager_review: ReviewMilestone,
    pub upcoming: Vec<Deadline>,
    pub skills: Vec<SkillRating>,
    pub manager_feedback: String,
    pub goals: Vec<DevelopmentGoal>,
    pub activity: Vec<Activity>,
}

/// Dashboard data for exactly one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum DashboardSnapshot {
    Admin(AdminDashboard),
    Manager(ManagerDashboard),
    Employee(EmployeeDashboard),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_and_handles_zero() {
        assert_eq!(percent(32, 124), 26);
        assert_eq!(percent(14, 124), 11);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(5, 0), 0);
        assert_eq!(percent(7, 5), 100);
    }

    #[test]
    fn department_pending_is_the_remainder() {
        let dept = DepartmentProgress { name: "Sales".into(), completed: 32, total: 40 };
        assert_eq!(dept.pending(), 8);
        assert_eq!(dept.percent(), 80);
    }

    #[test]
    fn team_member_links_to_filtered_reviews() {
        let member = TeamMember {
            id: "3".into(),
            name: "Michael Brown".into(),
            title: "Product Manager".into(),
            review_status: ReviewStatus::Pending,
        };
        assert_eq!(member.reviews_href(), "/reviews?employee=3");
    }

    #[test]
    fn snapshot_is_tagged_by_view() {
        let snapshot = DashboardSnapshot::Manager(ManagerDashboard {
            team: vec![],
            stats: ReviewStats { total: 0, completed: 0, in_progress: 0, pending: 0, completion_rate: 0 },
            deadlines: vec![],
            activity: vec![],
        });
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["view"], "manager");
    }
}
