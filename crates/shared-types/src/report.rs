use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Report {
    pub id: String,
    pub name: String,
    pub description: String,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Department {
    #[default]
    All,
    Engineering,
    Marketing,
    Sales,
    Hr,
    Finance,
}

pub const DEPARTMENTS: [Department; 6] = [
    Department::All,
    Department::Engineering,
    Department::Marketing,
    Department::Sales,
    Department::Hr,
    Department::Finance,
];

impl Department {
    pub fn value(&self) -> &'static str {
        match self {
            Department::All => "all",
            Department::Engineering => "engineering",
            Department::Marketing => "marketing",
            Department::Sales => "sales",
            Department::Hr => "hr",
            Department::Finance => "finance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Department::All => "All Departments",
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Hr => "HR",
            Department::Finance => "Finance",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        DEPARTMENTS.into_iter().find(|d| d.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Period {
    #[default]
    #[serde(rename = "q1-2025")]
    Q1,
    #[serde(rename = "q2-2025")]
    Q2,
    #[serde(rename = "q3-2025")]
    Q3,
    #[serde(rename = "q4-2025")]
    Q4,
    #[serde(rename = "annual-2025")]
    Annual,
}

pub const PERIODS: [Period; 5] = [Period::Q1, Period::Q2, Period::Q3, Period::Q4, Period::Annual];

impl Period {
    pub fn value(&self) -> &'static str {
        match self {
            Period::Q1 => "q1-2025",
            Period::Q2 => "q2-2025",
            Period::Q3 => "q3-2025",
            Period::Q4 => "q4-2025",
            Period::Annual => "annual-2025",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Q1 => "Q1 2025",
            Period::Q2 => "Q2 2025",
            Period::Q3 => "Q3 2025",
            Period::Q4 => "Q4 2025",
            Period::Annual => "Annual 2025",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        PERIODS.into_iter().find(|p| p.value() == value)
    }
}

/// Selection on the reports page. `Default` is the reset state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReportFilters {
    #[serde(default)]
    pub department: Department,
    #[serde(default)]
    pub period: Period,
}

impl ReportFilters {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Reports plus the filters they were requested with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReportList {
    pub filters: ReportFilters,
    pub reports: Vec<Report>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_all_and_first_quarter() {
        let mut filters = ReportFilters { department: Department::Sales, period: Period::Annual };
        assert!(!filters.is_default());
        filters.reset();
        assert_eq!(filters.department, Department::All);
        assert_eq!(filters.period, Period::Q1);
    }

    #[test]
    fn values_parse_back() {
        for department in DEPARTMENTS {
            assert_eq!(Department::from_value(department.value()), Some(department));
        }
        for period in PERIODS {
            assert_eq!(Period::from_value(period.value()), Some(period));
        }
        assert_eq!(Department::from_value("legal"), None);
    }

    #[test]
    fn filters_deserialize_from_query_style_json() {
        let filters: ReportFilters =
            serde_json::from_str(r#"{"department":"hr","period":"annual-2025"}"#).unwrap();
        assert_eq!(filters.department, Department::Hr);
        assert_eq!(filters.period, Period::Annual);

        let empty: ReportFilters = serde_json::from_str("{}").unwrap();
        assert!(empty.is_default());
    }
}
