use super::entity::{EntityKind, Listable, StatusCode, contains_ci};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    Active,
    Closed,
}

impl StatusCode for PositionStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Closed];

    fn code(&self) -> &'static str {
        match self {
            PositionStatus::Active => "active",
            PositionStatus::Closed => "closed",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PositionStatus::Active => "Hiring",
            PositionStatus::Closed => "Closed",
        }
    }
}

/// One weighted dimension of a position's competency model.
#[derive(Debug, Clone, Serialize)]
pub struct CompetencyDimension {
    pub key: String,
    pub label: String,
    /// Percentage; the weights of a model add up to 100.
    pub weight: u32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Position {
    pub id: u32,
    pub title: String,
    pub department: String,
    pub employment_type: String,
    pub location: String,
    pub salary: String,
    pub status: PositionStatus,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub competency_model: Vec<CompetencyDimension>,
}

impl Position {
    pub fn total_weight(&self) -> u32 {
        self.competency_model.iter().map(|d| d.weight).sum()
    }
}

impl Listable for Position {
    const KIND: EntityKind = EntityKind::Positions;

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.title, needle)
            || contains_ci(&self.department, needle)
            || contains_ci(&self.location, needle)
    }

    fn statuses() -> Vec<&'static str> {
        PositionStatus::codes()
    }

    fn status_code(&self) -> Option<&'static str> {
        Some(self.status.code())
    }

    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Title",
            "Department",
            "Type",
            "Location",
            "Salary",
            "Updated",
            "Status",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.department.clone(),
            self.employment_type.clone(),
            self.location.clone(),
            self.salary.clone(),
            self.updated_at.to_string(),
            self.status.label().to_string(),
        ]
    }
}
