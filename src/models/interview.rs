use super::entity::{EntityKind, Listable, StatusCode, contains_ci};
use crate::core::calendar::CalendarEvent;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewStatus {
    Pending,
    Completed,
    Cancelled,
}

impl StatusCode for InterviewStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Completed, Self::Cancelled];

    fn code(&self) -> &'static str {
        match self {
            InterviewStatus::Pending => "pending",
            InterviewStatus::Completed => "completed",
            InterviewStatus::Cancelled => "cancelled",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            InterviewStatus::Pending => "To interview",
            InterviewStatus::Completed => "Completed",
            InterviewStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionRef {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewCandidate {
    pub id: u32,
    pub name: String,
    pub current_position: String,
    pub company: String,
    pub apply_position: PositionRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct Interview {
    pub id: u32,
    pub date: NaiveDate,
    /// "HH:MM-HH:MM"
    pub time: String,
    pub candidate: InterviewCandidate,
    pub interviewer: String,
    pub location: String,
    pub status: InterviewStatus,
}

impl Interview {
    pub fn to_calendar_event(&self) -> CalendarEvent {
        CalendarEvent {
            id: self.id.to_string(),
            date: self.date,
            time: self.time.clone(),
            title: self.candidate.name.clone(),
            kind: self.status.code().to_string(),
        }
    }
}

impl Listable for Interview {
    const KIND: EntityKind = EntityKind::Interviews;
    const HAS_POSITION: bool = true;
    const HAS_DATE: bool = true;

    fn matches_search(&self, needle: &str) -> bool {
        contains_ci(&self.candidate.name, needle)
    }

    fn statuses() -> Vec<&'static str> {
        InterviewStatus::codes()
    }

    fn status_code(&self) -> Option<&'static str> {
        Some(self.status.code())
    }

    /// Matches the applied position by id or by exact name.
    fn matches_position(&self, position: &str) -> bool {
        let apply = &self.candidate.apply_position;
        apply.name == position || position.parse::<u32>().is_ok_and(|id| id == apply.id)
    }

    fn occurs_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Date",
            "Time",
            "Candidate",
            "Position",
            "Interviewer",
            "Location",
            "Status",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.date.to_string(),
            self.time.clone(),
            self.candidate.name.clone(),
            self.candidate.apply_position.name.clone(),
            self.interviewer.clone(),
            self.location.clone(),
            self.status.label().to_string(),
        ]
    }
}
