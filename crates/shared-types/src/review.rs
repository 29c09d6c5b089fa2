use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[cfg(feature = "validation")]
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ReviewType {
    #[default]
    #[serde(rename = "self")]
    SelfAssessment,
    #[serde(rename = "peer")]
    Peer,
    #[serde(rename = "manager")]
    Manager,
}

pub const REVIEW_TYPES: [ReviewType; 3] = [ReviewType::SelfAssessment, ReviewType::Peer, ReviewType::Manager];

impl ReviewType {
    pub fn value(&self) -> &'static str {
        match self {
            ReviewType::SelfAssessment => "self",
            ReviewType::Peer => "peer",
            ReviewType::Manager => "manager",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewType::SelfAssessment => "Self Assessment",
            ReviewType::Peer => "Peer Review",
            ReviewType::Manager => "Manager Review",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        REVIEW_TYPES.into_iter().find(|t| t.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ReviewStatus {
    Pending,
    InProgress,
    Completed,
}

impl ReviewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::InProgress => "In Progress",
            ReviewStatus::Completed => "Completed",
        }
    }
}

/// A review as listed on `/reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Review {
    pub id: String,
    pub review_type: ReviewType,
    pub subject: String,
    pub status: ReviewStatus,
    pub due_date: NaiveDate,
    /// Reviewed employee; `None` for reviews not tied to a team member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

/// Keep the reviews about `employee_id`, or all of them when no filter is given.
pub fn filter_reviews<'a>(reviews: &'a [Review], employee_id: Option<&str>) -> Vec<&'a Review> {
    reviews
        .iter()
        .filter(|review| match employee_id {
            Some(id) => review.employee_id.as_deref() == Some(id),
            None => true,
        })
        .collect()
}

/// Rated dimensions on the Criteria step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    TechnicalSkills,
    Communication,
    Teamwork,
    ProblemSolving,
    Leadership,
}

pub const CRITERIA: [Criterion; 5] = [
    Criterion::TechnicalSkills,
    Criterion::Communication,
    Criterion::Teamwork,
    Criterion::ProblemSolving,
    Criterion::Leadership,
];

impl Criterion {
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::TechnicalSkills => "technical_skills",
            Criterion::Communication => "communication",
            Criterion::Teamwork => "teamwork",
            Criterion::ProblemSolving => "problem_solving",
            Criterion::Leadership => "leadership",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::TechnicalSkills => "Technical Skills",
            Criterion::Communication => "Communication",
            Criterion::Teamwork => "Teamwork",
            Criterion::ProblemSolving => "Problem Solving",
            Criterion::Leadership => "Leadership",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Criterion::TechnicalSkills => "Knowledge and application of technical skills required for the role.",
            Criterion::Communication => "Ability to communicate effectively with team members and stakeholders.",
            Criterion::Teamwork => "Collaboration and contribution to team objectives.",
            Criterion::ProblemSolving => "Ability to identify, analyze, and resolve problems effectively.",
            Criterion::Leadership => "Ability to guide, influence, and inspire others.",
        }
    }
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Optional 1..=5 rating per criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CriteriaRatings {
    #[cfg_attr(feature = "validation", validate(range(min = 1, max = 5, message = "Ratings range from 1 to 5")))]
    pub technical_skills: Option<u8>,
    #[cfg_attr(feature = "validation", validate(range(min = 1, max = 5, message = "Ratings range from 1 to 5")))]
    pub communication: Option<u8>,
    #[cfg_attr(feature = "validation", validate(range(min = 1, max = 5, message = "Ratings range from 1 to 5")))]
    pub teamwork: Option<u8>,
    #[cfg_attr(feature = "validation", validate(range(min = 1, max = 5, message = "Ratings range from 1 to 5")))]
    pub problem_solving: Option<u8>,
    #[cfg_attr(feature = "validation", validate(range(min = 1, max = 5, message = "Ratings range from 1 to 5")))]
    pub leadership: Option<u8>,
}

impl CriteriaRatings {
    pub fn get(&self, criterion: Criterion) -> Option<u8> {
        match criterion {
            Criterion::TechnicalSkills => self.technical_skills,
            Criterion::Communication => self.communication,
            Criterion::Teamwork => self.teamwork,
            Criterion::ProblemSolving => self.problem_solving,
            Criterion::Leadership => self.leadership,
        }
    }

    pub fn set(&mut self, criterion: Criterion, rating: u8) {
        let slot = match criterion {
            Criterion::TechnicalSkills => &mut self.technical_skills,
            Criterion::Communication => &mut self.communication,
            Criterion::Teamwork => &mut self.teamwork,
            Criterion::ProblemSolving => &mut self.problem_solving,
            Criterion::Leadership => &mut self.leadership,
        };
        *slot = Some(rating.clamp(MIN_RATING, MAX_RATING));
    }
}

/// Everything the review wizard collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ReviewDraft {
    pub review_type: ReviewType,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, message = "Subject must be at least 2 characters."))
    )]
    pub subject: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[cfg_attr(feature = "validation", validate(nested))]
    pub ratings: CriteriaRatings,
    #[serde(default)]
    pub strengths: String,
    #[serde(default)]
    pub improvements: String,
    #[serde(default)]
    pub additional_comments: String,
    pub send_email: bool,
    pub send_reminders: bool,
}

impl ReviewDraft {
    /// Blank draft: self assessment due `today`, both notifications on.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            review_type: ReviewType::SelfAssessment,
            subject: String::new(),
            employee_id: None,
            due_date: today,
            description: String::new(),
            ratings: CriteriaRatings::default(),
            strengths: String::new(),
            improvements: String::new(),
            additional_comments: String::new(),
            send_email: true,
            send_reminders: true,
        }
    }

    /// Peer and manager reviews are about someone else.
    pub fn needs_employee(&self) -> bool {
        self.review_type != ReviewType::SelfAssessment
    }

    /// Form-level checks shared by the wizard and the server.
    pub fn check(&self) -> Result<(), AppError> {
        let mut field_errors = HashMap::new();
        if self.subject.trim().chars().count() < 2 {
            field_errors.insert(
                "subject".to_string(),
                "Subject must be at least 2 characters.".to_string(),
            );
        }
        let has_employee = self.employee_id.as_deref().is_some_and(|id| !id.is_empty());
        if self.needs_employee() && !has_employee {
            field_errors.insert("employee_id".to_string(), "Select the employee to review.".to_string());
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Please fix the highlighted fields.", field_errors))
        }
    }
}

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewStep {
    #[default]
    Details,
    Criteria,
    Comments,
    Notifications,
}

pub const REVIEW_STEPS: [ReviewStep; 4] = [
    ReviewStep::Details,
    ReviewStep::Criteria,
    ReviewStep::Comments,
    ReviewStep::Notifications,
];

impl ReviewStep {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewStep::Details => "Details",
            ReviewStep::Criteria => "Criteria",
            ReviewStep::Comments => "Comments",
            ReviewStep::Notifications => "Notifications",
        }
    }

    /// The following step; `None` on the last one, where Submit replaces Next.
    pub fn next(&self) -> Option<Self> {
        match self {
            ReviewStep::Details => Some(ReviewStep::Criteria),
            ReviewStep::Criteria => Some(ReviewStep::Comments),
            ReviewStep::Comments => Some(ReviewStep::Notifications),
            ReviewStep::Notifications => None,
        }
    }

    /// The preceding step; `None` on the first one, where Previous is disabled.
    pub fn previous(&self) -> Option<Self> {
        match self {
            ReviewStep::Details => None,
            ReviewStep::Criteria => Some(ReviewStep::Details),
            ReviewStep::Comments => Some(ReviewStep::Criteria),
            ReviewStep::Notifications => Some(ReviewStep::Comments),
        }
    }

    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}
