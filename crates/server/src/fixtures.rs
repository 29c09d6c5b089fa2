//! Mock data behind every read. Nothing here is persisted or mutated.

use chrono::NaiveDate;
use shared_types::{
    Activity, AdminDashboard, Deadline, DepartmentProgress, DevelopmentGoal, DirectoryUser,
    EmployeeDashboard, EmployeeOption, ManagerDashboard, PeerReviewProgress, Report, Review,
    ReviewMilestone, ReviewStats, ReviewStatus, ReviewType, SkillRating, TeamMember, TrendPoint,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn review(
    id: &str,
    review_type: ReviewType,
    subject: &str,
    status: ReviewStatus,
    due_date: NaiveDate,
    employee_id: Option<&str>,
) -> Review {
    Review {
        id: id.to_string(),
        review_type,
        subject: subject.to_string(),
        status,
        due_date,
        employee_id: employee_id.map(str::to_string),
    }
}

pub fn reviews() -> Vec<Review> {
    vec![
        review("1", ReviewType::SelfAssessment, "Annual Self Review", ReviewStatus::Pending, date(2025, 4, 15), None),
        review("2", ReviewType::Peer, "John Doe - Q1 Review", ReviewStatus::Completed, date(2025, 3, 1), None),
        review("3", ReviewType::Manager, "Jane Smith - Annual Review", ReviewStatus::InProgress, date(2025, 4, 10), None),
        review("4", ReviewType::Manager, "Alex Johnson - Q1 Review", ReviewStatus::Completed, date(2025, 3, 28), Some("1")),
        review("5", ReviewType::Manager, "Sarah Williams - Q1 Review", ReviewStatus::InProgress, date(2025, 4, 5), Some("2")),
        review("6", ReviewType::Manager, "Michael Brown - Q1 Review", ReviewStatus::Pending, date(2025, 4, 12), Some("3")),
    ]
}

pub fn reports() -> Vec<Report> {
    [
        ("1", "Department Performance Summary", "Overall performance metrics by department", date(2025, 3, 15)),
        ("2", "Individual Progress Report", "Detailed performance metrics for each employee", date(2025, 3, 10)),
        ("3", "Review Completion Status", "Tracking of review completion across the organization", date(2025, 3, 5)),
    ]
    .into_iter()
    .map(|(id, name, description, last_updated)| Report {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        last_updated,
    })
    .collect()
}

pub fn directory() -> Vec<DirectoryUser> {
    [
        ("1", "Jane Smith", "jane.smith@example.com", "Admin"),
        ("2", "John Doe", "john.doe@example.com", "User"),
        ("3", "Alex Johnson", "alex.johnson@example.com", "Editor"),
        ("4", "Sam Wilson", "sam.wilson@example.com", "User"),
        ("5", "Taylor Brown", "taylor.brown@example.com", "Developer"),
        ("6", "Jordan Lee", "jordan.lee@example.com", "User"),
    ]
    .into_iter()
    .map(|(id, name, email, title)| DirectoryUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        title: title.to_string(),
    })
    .collect()
}

/// Selectable subjects of a peer or manager review.
pub fn employees() -> Vec<EmployeeOption> {
    [
        ("1", "John Smith"),
        ("2", "Sarah Williams"),
        ("3", "Michael Brown"),
        ("4", "Emily Davis"),
        ("5", "David Wilson"),
    ]
    .into_iter()
    .map(|(id, name)| EmployeeOption {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

pub fn activity() -> Vec<Activity> {
    [
        (1, "John Smith", "completed", "Self Assessment", "2 hours ago"),
        (2, "Sarah Johnson", "submitted", "Peer Review for Alex Johnson", "4 hours ago"),
        (3, "Michael Brown", "started", "Manager Review for Emily Davis", "Yesterday at 3:45 PM"),
        (4, "Emily Davis", "updated", "Development Goals", "Yesterday at 1:30 PM"),
        (5, "David Wilson", "commented", "on Sarah Johnson's review", "2 days ago"),
    ]
    .into_iter()
    .map(|(id, actor, action, subject, timestamp)| Activity {
        id,
        actor: actor.to_string(),
        action: action.to_string(),
        subject: subject.to_string(),
        timestamp: timestamp.to_string(),
    })
    .collect()
}

fn stats(total: u32, completed: u32, in_progress: u32, pending: u32) -> ReviewStats {
    ReviewStats {
        total,
        completed,
        in_progress,
        pending,
        completion_rate: shared_types::percent(completed, total),
    }
}

pub fn admin_dashboard() -> AdminDashboard {
    let departments = [
        ("Engineering", 85, 100),
        ("Marketing", 45, 60),
        ("Sales", 32, 40),
        ("HR", 18, 20),
        ("Finance", 12, 15),
    ]
    .into_iter()
    .map(|(name, completed, total)| DepartmentProgress {
        name: name.to_string(),
        completed,
        total,
    })
    .collect();

    let trend = [
        ("Mar 1", 10, 25),
        ("Mar 5", 15, 25),
        ("Mar 10", 22, 25),
        ("Mar 15", 28, 40),
        ("Mar 20", 35, 40),
        ("Mar 25", 42, 60),
        ("Mar 30", 50, 60),
        ("Apr 1", 55, 70),
        ("Apr 5", 65, 80),
        ("Apr 10", 78, 124),
    ]
    .into_iter()
    .map(|(label, completed, total)| TrendPoint {
        label: label.to_string(),
        completed,
        total,
    })
    .collect();

    AdminDashboard {
        stats: stats(124, 78, 32, 14),
        departments,
        trend,
        activity: activity(),
    }
}

pub fn manager_dashboard() -> ManagerDashboard {
    let team = [
        ("1", "Alex Johnson", "Senior Developer", ReviewStatus::Completed),
        ("2", "Sarah Williams", "UX Designer", ReviewStatus::InProgress),
        ("3", "Michael Brown", "Product Manager", ReviewStatus::Pending),
        ("4", "Emily Davis", "Marketing Specialist", ReviewStatus::Completed),
        ("5", "David Wilson", "Data Analyst", ReviewStatus::InProgress),
    ]
    .into_iter()
    .map(|(id, name, title, review_status)| TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        review_status,
    })
    .collect();

    ManagerDashboard {
        team,
        stats: stats(12, 5, 4, 3),
        deadlines: vec![
            Deadline { title: "Q1 Performance Reviews".into(), due_in_days: 5 },
            Deadline { title: "Project Assessments".into(), due_in_days: 12 },
        ],
        activity: activity(),
    }
}

pub fn employee_dashboard() -> EmployeeDashboard {
    let skills = [
        ("Technical Skills", 4),
        ("Communication", 3),
        ("Teamwork", 5),
        ("Problem Solving", 4),
        ("Leadership", 3),
    ]
    .into_iter()
    .map(|(name, rating)| SkillRating {
        name: name.to_string(),
        rating,
        max_rating: 5,
    })
    .collect();

    let goals = [
        (
            "Improve Leadership Skills",
            "Take on more project leadership responsibilities and mentor junior team members.",
            30,
        ),
        (
            "Enhance Technical Knowledge",
            "Complete advanced certification in relevant technical areas.",
            60,
        ),
        (
            "Improve Presentation Skills",
            "Practice delivering presentations to larger audiences and stakeholders.",
            45,
        ),
    ]
    .into_iter()
    .map(|(title, description, progress)| DevelopmentGoal {
        title: title.to_string(),
        description: description.to_string(),
        progress,
    })
    .collect();

    EmployeeDashboard {
        self_review: ReviewMilestone {
            status: ReviewStatus::Completed,
            due: "March 15, 2025".into(),
        },
        peer_reviews: PeerReviewProgress {
            completed: 3,
            total: 5,
            due: "March 20, 2025".into(),
        },
        manager_review: ReviewMilestone {
            status: ReviewStatus::Pending,
            due: "April 1, 2025".into(),
        },
        upcoming: vec![
            Deadline { title: "Peer Review: John Smith".into(), due_in_days: 3 },
            Deadline { title: "Peer Review: Sarah Johnson".into(), due_in_days: 5 },
        ],
        skills,
        manager_feedback: "Consistently delivers high-quality work and collaborates effectively \
            with the team. Could improve on taking more initiative in leading projects and \
            developing strategic thinking skills."
            .into(),
        goals,
        activity: activity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_stats_match_department_totals() {
        let dashboard = admin_dashboard();
        assert_eq!(dashboard.stats.completion_rate, 63);
        let stats = &dashboard.stats;
        assert_eq!(stats.completed + stats.in_progress + stats.pending, stats.total);
    }

    #[test]
    fn filtered_review_fixtures_cover_team_members() {
        let all = reviews();
        let team = manager_dashboard().team;
        for member in team.iter().take(3) {
            assert!(all.iter().any(|r| r.employee_id.as_deref() == Some(member.id.as_str())));
        }
    }
}
