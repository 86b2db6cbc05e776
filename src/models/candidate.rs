use super::entity::{EntityKind, Listable, StatusCode, contains_ci};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateStatus {
    Screening,
    ToSchedule,
    Interviewing,
    AwaitingFeedback,
    Passed,
    Rejected,
}

impl StatusCode for CandidateStatus {
    const ALL: &'static [Self] = &[
        Self::Screening,
        Self::ToSchedule,
        Self::Interviewing,
        Self::AwaitingFeedback,
        Self::Passed,
        Self::Rejected,
    ];

    fn code(&self) -> &'static str {
        match self {
            CandidateStatus::Screening => "screening",
            CandidateStatus::ToSchedule => "to-schedule",
            CandidateStatus::Interviewing => "interviewing",
            CandidateStatus::AwaitingFeedback => "awaiting-feedback",
            CandidateStatus::Passed => "passed",
            CandidateStatus::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CandidateStatus::Screening => "Resume screening",
            CandidateStatus::ToSchedule => "To schedule",
            CandidateStatus::Interviewing => "Interviewing",
            CandidateStatus::AwaitingFeedback => "Awaiting feedback",
            CandidateStatus::Passed => "Passed",
            CandidateStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub current_position: String,
    pub current_company: String,
    pub salary: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub applied_position: String,
    pub status: CandidateStatus,
}

impl Listable for Candidate {
    const KIND: EntityKind = EntityKind::Candidates;
    const HAS_POSITION: bool = true;

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.name, needle)
            || contains_ci(&self.email, needle)
            || self.phone.contains(needle)
    }

    fn statuses() -> Vec<&'static str> {
        CandidateStatus::codes()
    }

    fn status_code(&self) -> Option<&'static str> {
        Some(self.status.code())
    }

    fn matches_position(&self, position: &str) -> bool {
        self.applied_position == position
    }

    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Name",
            "Current role",
            "Company",
            "Applied for",
            "Email",
            "Phone",
            "Status",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.current_position.clone(),
            self.current_company.clone(),
            self.applied_position.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.status.label().to_string(),
        ]
    }
}
